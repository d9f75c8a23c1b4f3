use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use valkyrie_core::model::{
    params_ops::MISSING_AREA_MESSAGE, DatasetCode, QueryParameters, Selection,
};

use super::{CatalogService, GranuleQuery, OrderService};
use crate::ValkyrieError;

/// number of catalog granules matching a query for one collection.
/// serializes as `{short_name: hits}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GranuleCount {
    pub short_name: String,
    pub hits: u64,
}

/// response body of one dataset order. serializes as `{identifier: body}`.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderResponse {
    pub dataset: DatasetCode,
    pub body: Value,
}

impl OrderResponse {
    pub fn identifier(&self) -> &'static str {
        self.dataset.order_identifier()
    }
}

impl Serialize for GranuleCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.short_name, &self.hits)?;
        map.end()
    }
}

impl Serialize for OrderResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.identifier(), &self.body)?;
        map.end()
    }
}

/// counts the catalog granules for every collection behind the selected datasets,
/// one query per collection, in vocabulary order.
///
/// returns `Ok(None)` and logs a warning when no area has been selected.
pub fn query_cmr<C: CatalogService>(
    selection: &Selection,
    catalog: &C,
) -> Result<Option<Vec<GranuleCount>>, ValkyrieError> {
    let area = match &selection.area {
        Some(area) => area,
        None => {
            log::warn!("{MISSING_AREA_MESSAGE}");
            return Ok(None);
        }
    };
    let bbox = area.bounding_box()?;
    let queries = selection
        .datasets
        .iter()
        .flat_map(|code| code.catalog_datasets())
        .map(|dataset| GranuleQuery::new(dataset, selection.date_range, bbox));

    let mut granules = vec![];
    for query in queries {
        let hits = catalog.granule_hits(&query)?;
        log::info!("{}: {hits} granules", query.short_name);
        granules.push(GranuleCount {
            short_name: query.short_name,
            hits,
        });
    }
    Ok(Some(granules))
}

/// submits one order per selected dataset, in vocabulary order, and collects
/// the responses. the first failure aborts the remaining orders.
pub fn post_orders<O: OrderService>(
    selection: &Selection,
    params: &QueryParameters,
    orders: &O,
) -> Result<Vec<OrderResponse>, ValkyrieError> {
    let mut responses = vec![];
    for dataset in selection.datasets.iter() {
        let body = orders.submit_order(dataset.order_identifier(), params)?;
        log::info!("order for {} submitted", dataset.order_identifier());
        responses.push(OrderResponse {
            dataset: *dataset,
            body,
        });
    }
    Ok(responses)
}
