use std::fmt::Display;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::SelectionError;

/// a granule collection in the metadata catalog, identified by its short name
/// and, where more than one version is published, a version string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogDataset {
    pub short_name: &'static str,
    pub version: Option<&'static str>,
}

const ATM_CATALOG: [CatalogDataset; 2] = [
    CatalogDataset {
        short_name: "ILATM1B",
        version: None,
    },
    CatalogDataset {
        short_name: "BLATM1B",
        version: None,
    },
];

const GLAH06_CATALOG: [CatalogDataset; 1] = [CatalogDataset {
    short_name: "GLAH06",
    version: None,
}];

const ILVIS2_CATALOG: [CatalogDataset; 1] = [CatalogDataset {
    short_name: "ILVIS2",
    version: Some("002"),
}];

/// the user-facing dataset vocabulary. ordering follows the declaration order,
/// which is also the order datasets are queried in.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum DatasetCode {
    /// Airborne Topographic Mapper L1B elevations (IceBridge and pre-IceBridge)
    #[serde(rename = "ATM")]
    #[value(name = "ATM")]
    Atm,
    /// ICESat GLAS L1B global elevation data
    #[serde(rename = "GLAH06")]
    #[value(name = "GLAH06")]
    Glah06,
    /// IceBridge LVIS L2 geolocated surface elevation
    #[serde(rename = "ILVIS2")]
    #[value(name = "ILVIS2")]
    Ilvis2,
}

impl DatasetCode {
    pub const ALL: [DatasetCode; 3] = [DatasetCode::Atm, DatasetCode::Glah06, DatasetCode::Ilvis2];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetCode::Atm => "ATM",
            DatasetCode::Glah06 => "GLAH06",
            DatasetCode::Ilvis2 => "ILVIS2",
        }
    }

    /// collections searched in the granule catalog for this dataset
    pub fn catalog_datasets(&self) -> &'static [CatalogDataset] {
        match self {
            DatasetCode::Atm => &ATM_CATALOG,
            DatasetCode::Glah06 => &GLAH06_CATALOG,
            DatasetCode::Ilvis2 => &ILVIS2_CATALOG,
        }
    }

    /// endpoint name of this dataset in the order service
    pub fn order_identifier(&self) -> &'static str {
        match self {
            DatasetCode::Atm => "ATM1B",
            DatasetCode::Glah06 => "GLAH06",
            DatasetCode::Ilvis2 => "ILVIS2",
        }
    }
}

impl Display for DatasetCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatasetCode {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SelectionError::UnknownDataset(s.to_string()))
    }
}
