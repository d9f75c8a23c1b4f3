//! blocking HTTP clients for the granule metadata catalog and the order service,
//! and the per-dataset query loops that drive them.
mod catalog;
mod order;
pub mod query_ops;

pub use catalog::{CatalogService, CmrClient, GranuleQuery, CMR_HITS_HEADER};
pub use order::{OrderClient, OrderService};
pub use query_ops::{post_orders, query_cmr, GranuleCount, OrderResponse};

use crate::ValkyrieError;

/// builds the shared blocking HTTP client used by both services.
fn http_client() -> Result<reqwest::blocking::Client, ValkyrieError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
