use serde::{Deserialize, Serialize};

use super::{BoundingBox, DateRange, Itrf};

/// the flat parameter record sent to the order service. field order is the
/// order the parameters appear in the request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    pub time_range: String,
    pub bbox: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itrf: Option<String>,
}

impl QueryParameters {
    pub fn new(date_range: &DateRange, bbox: &BoundingBox, itrf: Option<Itrf>) -> Self {
        Self {
            time_range: date_range.to_time_range(),
            bbox: bbox.to_string(),
            itrf: itrf.map(|i| i.as_str().to_string()),
        }
    }

    /// the parameters as (key, value) pairs, omitting an unset reference frame
    pub fn to_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("time_range", self.time_range.as_str()), ("bbox", self.bbox.as_str())];
        if let Some(itrf) = &self.itrf {
            pairs.push(("itrf", itrf.as_str()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2015, 6, 1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_serialize_without_itrf() {
        let bbox = BoundingBox::new(-51.2, 68.9, -47.6, 70.1).unwrap();
        let params = QueryParameters::new(&range(), &bbox, None);
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"time_range": "2015-01-01,2015-06-01", "bbox": "-51.2,68.9,-47.6,70.1"})
        );
        assert_eq!(params.to_pairs().len(), 2);
    }

    #[test]
    fn test_serialize_with_itrf() {
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0).unwrap();
        let params = QueryParameters::new(&range(), &bbox, Some(Itrf::Itrf2014));
        assert_eq!(
            params.to_pairs(),
            vec![
                ("time_range", "2015-01-01,2015-06-01"),
                ("bbox", "0,0,1,1"),
                ("itrf", "ITRF2014")
            ]
        );
    }
}
