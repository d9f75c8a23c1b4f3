mod area;
mod bounding_box;
mod dataset_code;
mod date_range;
mod error;
mod hemisphere;
mod itrf;
mod query_parameters;
mod selection;

pub mod geometry_ops;
pub mod params_ops;

pub use area::Area;
pub use bounding_box::BoundingBox;
pub use dataset_code::{CatalogDataset, DatasetCode};
pub use date_range::{DateRange, CATALOG_WINDOW_END, CATALOG_WINDOW_START};
pub use error::SelectionError;
pub use hemisphere::{Hemisphere, MapProjection, MapView};
pub use itrf::Itrf;
pub use query_parameters::QueryParameters;
pub use selection::{DatasetSelection, Selection};
