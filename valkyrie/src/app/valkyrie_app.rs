use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use valkyrie_core::model::{params_ops, Hemisphere};

use crate::{
    app::{AreaArgs, SelectionArgs},
    client::{self, CmrClient, OrderClient},
    config::ValkyrieConfig,
    ValkyrieError,
};

/// Command line tool for counting and ordering polar ice-sheet elevation granules
/// (ATM, GLAH06, ILVIS2) within an area of interest and date range.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ValkyrieApp {
    /// TOML configuration file overriding service endpoints and the date window.
    #[arg(short, long, global = true)]
    pub configuration_file: Option<String>,

    #[command(subcommand)]
    pub op: ValkyrieOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum ValkyrieOperation {
    /// print the bounding box of the area of interest
    Bbox {
        #[command(flatten)]
        area: AreaArgs,
    },
    /// print the order service parameters for the selection
    Params {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// count the catalog granules matching the selection, per collection
    Count {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// submit one order per selected dataset and print the responses
    Order {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// print the display projection for the selection map of a hemisphere
    Projection {
        #[arg(long, value_enum, default_value_t = Hemisphere::South)]
        hemisphere: Hemisphere,
    },
}

impl ValkyrieOperation {
    pub fn run(&self, config: &ValkyrieConfig) -> Result<(), ValkyrieError> {
        match self {
            ValkyrieOperation::Bbox { area } => {
                let area = area.area()?.ok_or_else(|| {
                    let msg = String::from("must provide --area or --bbox argument");
                    ValkyrieError::InvalidUserInput(msg)
                })?;
                let bbox = area.bounding_box()?;
                print_json(&bbox.corners())
            }
            ValkyrieOperation::Params { selection } => {
                let selection = selection.to_selection(&config.dates.window()?)?;
                match params_ops::build_params(&selection)? {
                    Some(params) => print_json(&params),
                    None => Ok(()),
                }
            }
            ValkyrieOperation::Count { selection } => {
                let selection = selection.to_selection(&config.dates.window()?)?;
                let catalog = CmrClient::new(&config.cmr)?;
                log::info!(
                    "counting granules for {} in {} ({} days) at {}",
                    selection.datasets,
                    selection.date_range,
                    selection.date_range.num_days(),
                    catalog.search_url()
                );
                match client::query_cmr(&selection, &catalog)? {
                    Some(granules) => print_json(&granules),
                    None => Ok(()),
                }
            }
            ValkyrieOperation::Order { selection } => {
                let selection = selection.to_selection(&config.dates.window()?)?;
                let params = match params_ops::build_params(&selection)? {
                    Some(params) => params,
                    None => return Ok(()),
                };
                let orders = OrderClient::new(&config.order)?;
                log::info!(
                    "ordering {} with parameters {:?}",
                    selection.datasets,
                    params.to_pairs()
                );
                let responses = client::post_orders(&selection, &params, &orders)?;
                print_json(&responses)
            }
            ValkyrieOperation::Projection { hemisphere } => print_json(&hemisphere.map_view()),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ValkyrieError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use valkyrie_core::model::{DatasetCode, Itrf};

    #[test]
    fn test_cli_definition() {
        ValkyrieApp::command().debug_assert();
    }

    #[test]
    fn test_parse_order_arguments() {
        let app = ValkyrieApp::try_parse_from([
            "valkyrie",
            "order",
            "--bbox",
            "-51.2,68.9,-47.6,70.1",
            "--start-date",
            "2015-01-01",
            "--end-date",
            "2015-06-01",
            "--dataset",
            "atm",
            "--dataset",
            "GLAH06",
            "--itrf",
            "ITRF2014",
        ])
        .unwrap();
        match app.op {
            ValkyrieOperation::Order { selection } => {
                assert_eq!(selection.dataset, vec![DatasetCode::Atm, DatasetCode::Glah06]);
                assert_eq!(selection.itrf, Some(Itrf::Itrf2014));
                assert!(selection.area.bbox.is_some());
            }
            _ => panic!("expected order operation"),
        }
    }

    #[test]
    fn test_area_and_bbox_conflict() {
        let result = ValkyrieApp::try_parse_from([
            "valkyrie",
            "count",
            "--area",
            "drawn.geojson",
            "--bbox",
            "0,0,1,1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_params_without_area_is_not_an_error() {
        let op = ValkyrieOperation::Params {
            selection: SelectionArgs::default(),
        };
        assert!(op.run(&ValkyrieConfig::default()).is_ok());
    }

    #[test]
    fn test_bbox_requires_area() {
        let op = ValkyrieOperation::Bbox {
            area: AreaArgs::default(),
        };
        assert!(matches!(
            op.run(&ValkyrieConfig::default()),
            Err(ValkyrieError::InvalidUserInput(_))
        ));
    }
}
