use reqwest::header::HeaderValue;
use valkyrie_core::model::{BoundingBox, CatalogDataset, DateRange};

use crate::config::CmrConfig;
use crate::ValkyrieError;

/// response header carrying the total number of granules matching a search
pub const CMR_HITS_HEADER: &str = "CMR-Hits";

const GRANULE_SEARCH_PATH: &str = "search/granules.json";

/// a count-only granule search constrained by collection, time and space.
#[derive(Clone, Debug, PartialEq)]
pub struct GranuleQuery {
    pub short_name: String,
    pub version: Option<String>,
    pub temporal: DateRange,
    pub bounding_box: BoundingBox,
}

impl GranuleQuery {
    pub fn new(dataset: &CatalogDataset, temporal: DateRange, bounding_box: BoundingBox) -> Self {
        Self {
            short_name: dataset.short_name.to_string(),
            version: dataset.version.map(String::from),
            temporal,
            bounding_box,
        }
    }

    /// search parameters. `page_size=0` asks for the hit count only.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("short_name", self.short_name.clone())];
        if let Some(version) = &self.version {
            pairs.push(("version", version.clone()));
        }
        pairs.push(("temporal", self.temporal.to_temporal()));
        pairs.push(("bounding_box", self.bounding_box.to_string()));
        pairs.push(("page_size", String::from("0")));
        pairs
    }
}

/// a granule metadata catalog that can report how many granules match a query.
pub trait CatalogService {
    fn granule_hits(&self, query: &GranuleQuery) -> Result<u64, ValkyrieError>;
}

/// NASA Common Metadata Repository granule search client
#[derive(Debug)]
pub struct CmrClient {
    client: reqwest::blocking::Client,
    search_url: String,
}

impl CmrClient {
    pub fn new(config: &CmrConfig) -> Result<Self, ValkyrieError> {
        let search_url = format!(
            "{}/{GRANULE_SEARCH_PATH}",
            config.base_url.trim_end_matches('/')
        );
        Ok(Self {
            client: super::http_client()?,
            search_url,
        })
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

impl CatalogService for CmrClient {
    fn granule_hits(&self, query: &GranuleQuery) -> Result<u64, ValkyrieError> {
        log::debug!("GET {} {:?}", self.search_url, query.to_pairs());
        let response = self
            .client
            .get(&self.search_url)
            .query(&query.to_pairs())
            .send()?
            .error_for_status()?;
        parse_hits(
            &query.short_name,
            response.headers().get(CMR_HITS_HEADER),
        )
    }
}

fn parse_hits(short_name: &str, value: Option<&HeaderValue>) -> Result<u64, ValkyrieError> {
    let invalid = |message: String| ValkyrieError::InvalidHitCount {
        short_name: short_name.to_string(),
        header: CMR_HITS_HEADER,
        message,
    };
    let value = value.ok_or_else(|| invalid(String::from("header missing")))?;
    let text = value.to_str().map_err(|e| invalid(e.to_string()))?;
    text.trim()
        .parse::<u64>()
        .map_err(|e| invalid(format!("'{text}' is not a count: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::loopback;
    use chrono::NaiveDate;

    fn query(dataset: &CatalogDataset) -> GranuleQuery {
        let temporal = DateRange::new(
            NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2015, 6, 1).unwrap(),
        )
        .unwrap();
        let bbox = BoundingBox::new(-51.2, 68.9, -47.6, 70.1).unwrap();
        GranuleQuery::new(dataset, temporal, bbox)
    }

    #[test]
    fn test_pairs_without_version() {
        let q = query(&CatalogDataset {
            short_name: "ILATM1B",
            version: None,
        });
        assert_eq!(
            q.to_pairs(),
            vec![
                ("short_name", String::from("ILATM1B")),
                (
                    "temporal",
                    String::from("2015-01-01T00:00:00Z,2015-06-01T23:59:59Z")
                ),
                ("bounding_box", String::from("-51.2,68.9,-47.6,70.1")),
                ("page_size", String::from("0")),
            ]
        );
    }

    #[test]
    fn test_pairs_with_version() {
        let q = query(&CatalogDataset {
            short_name: "ILVIS2",
            version: Some("002"),
        });
        let pairs = q.to_pairs();
        assert_eq!(pairs[1], ("version", String::from("002")));
    }

    #[test]
    fn test_parse_hits() {
        let value = HeaderValue::from_static("1234");
        assert_eq!(parse_hits("GLAH06", Some(&value)).unwrap(), 1234);
    }

    #[test]
    fn test_parse_hits_missing_or_invalid() {
        assert!(matches!(
            parse_hits("GLAH06", None),
            Err(ValkyrieError::InvalidHitCount { short_name, .. }) if short_name == "GLAH06"
        ));
        let value = HeaderValue::from_static("many");
        assert!(parse_hits("GLAH06", Some(&value)).is_err());
    }

    #[test]
    fn test_granule_hits_reads_header() {
        let server = loopback::serve_once(
            "200 OK",
            &[(CMR_HITS_HEADER, "42")],
            r#"{"feed": {"entry": []}}"#,
        );
        let client = CmrClient::new(&CmrConfig {
            base_url: server.base_url(),
        })
        .unwrap();
        let hits = client
            .granule_hits(&query(&CatalogDataset {
                short_name: "ILVIS2",
                version: Some("002"),
            }))
            .unwrap();
        assert_eq!(hits, 42);
        assert_eq!(
            server.request_line(),
            "GET /search/granules.json?short_name=ILVIS2&version=002\
             &temporal=2015-01-01T00%3A00%3A00Z%2C2015-06-01T23%3A59%3A59Z\
             &bounding_box=-51.2%2C68.9%2C-47.6%2C70.1&page_size=0 HTTP/1.1"
        );
    }

    #[test]
    fn test_granule_hits_error_status() {
        let server = loopback::serve_once("400 Bad Request", &[], r#"{"errors": ["bad"]}"#);
        let client = CmrClient::new(&CmrConfig {
            base_url: server.base_url(),
        })
        .unwrap();
        let result = client.granule_hits(&query(&CatalogDataset {
            short_name: "GLAH06",
            version: None,
        }));
        assert!(matches!(result, Err(ValkyrieError::Http(_))));
        server.request_line();
    }

    #[test]
    fn test_search_url() {
        let client = CmrClient::new(&CmrConfig {
            base_url: String::from("https://cmr.uat.earthdata.nasa.gov/"),
        })
        .unwrap();
        assert_eq!(
            client.search_url(),
            "https://cmr.uat.earthdata.nasa.gov/search/granules.json"
        );
    }
}
