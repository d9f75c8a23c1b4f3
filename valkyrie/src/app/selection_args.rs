use std::path::Path;

use chrono::NaiveDate;
use clap::Args;
use serde::{Deserialize, Serialize};
use valkyrie_core::model::{
    Area, BoundingBox, DatasetCode, DatasetSelection, DateRange, Itrf, Selection,
};
use valkyrie_core::util::date_deserialization_ops::parse_naive_date;

use crate::ValkyrieError;

/// helper function for bounding box deserialization in clap
fn parse_bbox(s: &str) -> Result<BoundingBox, String> {
    s.parse::<BoundingBox>().map_err(|e| e.to_string())
}

/// helper function for date deserialization in clap
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    parse_naive_date(s).map_err(|e| e.to_string())
}

/// the area of interest, either drawn and exported as GeoJSON or typed as a box.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Args)]
pub struct AreaArgs {
    /// GeoJSON file holding the drawn polygon (Geometry, Feature or
    /// FeatureCollection, where the last feature is used)
    #[arg(short, long, conflicts_with = "bbox")]
    pub area: Option<String>,

    /// rectangular area of interest (format: minx,miny,maxx,maxy)
    #[arg(short, long, value_parser = parse_bbox, allow_hyphen_values(true))]
    pub bbox: Option<BoundingBox>,
}

impl AreaArgs {
    /// the selected area, or None when neither option was provided.
    pub fn area(&self) -> Result<Option<Area>, ValkyrieError> {
        match (&self.area, &self.bbox) {
            (Some(filename), _) => {
                let path = Path::new(filename);
                let contents =
                    std::fs::read_to_string(path).map_err(|e| ValkyrieError::ReadError {
                        path: path.to_owned(),
                        message: e.to_string(),
                    })?;
                Ok(Some(Area::from_geojson_str(&contents)?))
            }
            (None, Some(bbox)) => Ok(Some(Area::from(*bbox))),
            (None, None) => Ok(None),
        }
    }
}

/// everything the user selects before counting or ordering granules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Args)]
pub struct SelectionArgs {
    #[command(flatten)]
    pub area: AreaArgs,

    /// first day of the date range (YYYY-MM-DD). defaults to the start of the
    /// configured date window.
    #[arg(short, long, value_parser = parse_date)]
    pub start_date: Option<NaiveDate>,

    /// last day of the date range (YYYY-MM-DD). defaults to the end of the
    /// configured date window.
    #[arg(short, long, value_parser = parse_date)]
    pub end_date: Option<NaiveDate>,

    /// dataset to include, may be repeated. defaults to ATM.
    #[arg(short, long, value_enum, ignore_case = true)]
    pub dataset: Vec<DatasetCode>,

    /// reference frame for the order service. omit for none.
    #[arg(short, long, value_enum, ignore_case = true)]
    pub itrf: Option<Itrf>,
}

impl SelectionArgs {
    /// builds the selection, requiring the date range to lie within the window.
    pub fn to_selection(&self, window: &DateRange) -> Result<Selection, ValkyrieError> {
        let start = self.start_date.unwrap_or(window.start());
        let end = self.end_date.unwrap_or(window.end());
        let date_range = DateRange::new(start, end)?.ensure_within(window)?;
        let mut datasets = DatasetSelection::new(self.dataset.iter().copied());
        if datasets.is_empty() {
            datasets = DatasetSelection::default();
        }
        Ok(Selection::new(
            self.area.area()?,
            date_range,
            datasets,
            self.itrf,
        ))
    }
}
