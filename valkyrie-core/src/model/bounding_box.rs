use std::fmt::Display;
use std::str::FromStr;

use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};

use super::SelectionError;

/// axis-aligned rectangle enclosing a set of points. serialized and displayed in
/// the `minx,miny,maxx,maxy` order expected by both the granule catalog and the
/// order service.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, SelectionError> {
        if [min_x, min_y, max_x, max_y].iter().any(|v| !v.is_finite()) {
            return Err(SelectionError::InvalidArea(format!(
                "bounding box values must be finite, found ({min_x},{min_y},{max_x},{max_y})"
            )));
        }
        if max_x < min_x || max_y < min_y {
            return Err(SelectionError::InvalidArea(format!(
                "bounding box minimum ({min_x},{min_y}) exceeds maximum ({max_x},{max_y})"
            )));
        }
        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// the box as its two corners, `[(min_x, min_y), (max_x, max_y)]`
    pub fn corners(&self) -> [(f64, f64); 2] {
        [(self.min_x, self.min_y), (self.max_x, self.max_y)]
    }

    /// true if the point lies inside the box, boundaries inclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        let Coord { x: min_x, y: min_y } = rect.min();
        let Coord { x: max_x, y: max_y } = rect.max();
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        Rect::new(
            Coord {
                x: bbox.min_x,
                y: bbox.min_y,
            },
            Coord {
                x: bbox.max_x,
                y: bbox.max_y,
            },
        )
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

impl FromStr for BoundingBox {
    type Err = SelectionError;

    /// parses `minx,miny,maxx,maxy`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| {
                v.trim().parse::<f64>().map_err(|e| {
                    SelectionError::InvalidArea(format!(
                        "bounding box value '{v}' is not a number: {e}"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        match values[..] {
            [min_x, min_y, max_x, max_y] => BoundingBox::new(min_x, min_y, max_x, max_y),
            _ => Err(SelectionError::InvalidArea(format!(
                "bounding box '{s}' must have exactly 4 values (minx,miny,maxx,maxy), found {}",
                values.len()
            ))),
        }
    }
}
