use std::path::Path;

use chrono::NaiveDate;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use valkyrie_core::model::{DateRange, CATALOG_WINDOW_END, CATALOG_WINDOW_START};
use valkyrie_core::util::date_deserialization_ops::deserialize_naive_date;

use crate::ValkyrieError;

/// prefix for environment variable overrides, e.g. `VALKYRIE__ORDER__BASE_URL`
pub const ENV_PREFIX: &str = "VALKYRIE";

/// application configuration. every key is optional; missing keys fall back to
/// the production services and the full catalog date window.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValkyrieConfig {
    pub cmr: CmrConfig,
    pub order: OrderConfig,
    pub dates: DateWindowConfig,
}

/// granule metadata catalog endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CmrConfig {
    pub base_url: String,
}

impl Default for CmrConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://cmr.earthdata.nasa.gov"),
        }
    }
}

/// order submission service endpoint. dataset orders go to `{base_url}/1.0/{dataset}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    pub base_url: String,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://staging.valkyrie-vm.apps.nsidc.org"),
        }
    }
}

/// the span of dates a user may select
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateWindowConfig {
    #[serde(deserialize_with = "deserialize_naive_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_naive_date")]
    pub end_date: NaiveDate,
}

impl Default for DateWindowConfig {
    fn default() -> Self {
        Self {
            start_date: CATALOG_WINDOW_START,
            end_date: CATALOG_WINDOW_END,
        }
    }
}

impl DateWindowConfig {
    pub fn window(&self) -> Result<DateRange, ValkyrieError> {
        Ok(DateRange::new(self.start_date, self.end_date)?)
    }
}

impl ValkyrieConfig {
    /// loads configuration from an optional TOML file, then applies environment
    /// overrides.
    pub fn load(configuration_file: Option<&Path>) -> Result<Self, ValkyrieError> {
        let environment = Environment::with_prefix(ENV_PREFIX).separator("__");
        Self::load_with_environment(configuration_file, environment)
    }

    fn load_with_environment(
        configuration_file: Option<&Path>,
        environment: Environment,
    ) -> Result<Self, ValkyrieError> {
        let mut builder = Config::builder();
        if let Some(filepath) = configuration_file {
            if !filepath.is_file() {
                return Err(ValkyrieError::ReadError {
                    path: filepath.to_owned(),
                    message: String::from("configuration file does not exist"),
                });
            }
            builder = builder.add_source(File::from(filepath));
        }
        let config = builder
            .add_source(environment)
            .build()
            .map_err(|e| {
                let msg = format!("configuration produced error: {e}");
                ValkyrieError::InvalidUserInput(msg)
            })?;
        let valkyrie_config = config.try_deserialize::<ValkyrieConfig>().map_err(|e| {
            let msg = format!("error reading configuration: {e}");
            ValkyrieError::InvalidUserInput(msg)
        })?;
        // reject an inverted window up front
        valkyrie_config.dates.window()?;
        log::debug!("loaded configuration {valkyrie_config:?}");
        Ok(valkyrie_config)
    }
}
