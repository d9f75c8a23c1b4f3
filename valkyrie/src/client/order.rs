use serde_json::Value;
use valkyrie_core::model::QueryParameters;

use crate::config::OrderConfig;
use crate::ValkyrieError;

const API_VERSION: &str = "1.0";

/// a service accepting one data order per dataset identifier.
pub trait OrderService {
    /// submits an order and returns the decoded JSON response body, whatever
    /// the response status
    fn submit_order(&self, identifier: &str, params: &QueryParameters)
        -> Result<Value, ValkyrieError>;
}

/// client for the NSIDC order service
#[derive(Debug)]
pub struct OrderClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl OrderClient {
    pub fn new(config: &OrderConfig) -> Result<Self, ValkyrieError> {
        Ok(Self {
            client: super::http_client()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// endpoint receiving orders for a dataset identifier
    pub fn order_url(&self, identifier: &str) -> String {
        format!("{}/{API_VERSION}/{identifier}", self.base_url)
    }
}

impl OrderService for OrderClient {
    fn submit_order(
        &self,
        identifier: &str,
        params: &QueryParameters,
    ) -> Result<Value, ValkyrieError> {
        let url = self.order_url(identifier);
        log::debug!("POST {url} {:?}", params.to_pairs());
        let response = self.client.post(&url).query(&params.to_pairs()).send()?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("order for {identifier} answered with status {status}");
        }
        // rejections carry a JSON explanation, kept as the order's response
        let body = response.json::<Value>()?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::loopback;
    use serde_json::json;
    use valkyrie_core::model::{BoundingBox, DateRange};

    fn params() -> QueryParameters {
        let range = DateRange::new(
            chrono::NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2015, 6, 1).unwrap(),
        )
        .unwrap();
        let bbox = BoundingBox::new(-51.2, 68.9, -47.6, 70.1).unwrap();
        QueryParameters::new(&range, &bbox, None)
    }

    fn client(base_url: String) -> OrderClient {
        OrderClient::new(&OrderConfig { base_url }).unwrap()
    }

    #[test]
    fn test_submit_order_posts_query_parameters() {
        let server = loopback::serve_once("200 OK", &[], r#"{"order_id": 17}"#);
        let body = client(server.base_url())
            .submit_order("ATM1B", &params())
            .unwrap();
        assert_eq!(body, json!({"order_id": 17}));
        assert_eq!(
            server.request_line(),
            "POST /1.0/ATM1B?time_range=2015-01-01%2C2015-06-01&bbox=-51.2%2C68.9%2C-47.6%2C70.1 HTTP/1.1"
        );
    }

    #[test]
    fn test_submit_order_keeps_rejection_body() {
        let server = loopback::serve_once(
            "422 Unprocessable Entity",
            &[],
            r#"{"error": "bbox too large"}"#,
        );
        let body = client(server.base_url())
            .submit_order("GLAH06", &params())
            .unwrap();
        assert_eq!(body, json!({"error": "bbox too large"}));
        assert!(server.request_line().starts_with("POST /1.0/GLAH06?"));
    }

    #[test]
    fn test_submit_order_non_json_body_fails() {
        let server = loopback::serve_once("500 Internal Server Error", &[], "<html>oops</html>");
        let result = client(server.base_url()).submit_order("ILVIS2", &params());
        assert!(matches!(result, Err(ValkyrieError::Http(_))));
        server.request_line();
    }

    #[test]
    fn test_order_url() {
        let client = OrderClient::new(&OrderConfig::default()).unwrap();
        assert_eq!(
            client.order_url("ATM1B"),
            "http://staging.valkyrie-vm.apps.nsidc.org/1.0/ATM1B"
        );
    }

    #[test]
    fn test_order_url_trailing_slash() {
        let client = OrderClient::new(&OrderConfig {
            base_url: String::from("http://localhost:5000/"),
        })
        .unwrap();
        assert_eq!(client.order_url("GLAH06"), "http://localhost:5000/1.0/GLAH06");
    }
}
