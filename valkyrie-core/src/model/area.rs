use geo::{Coord, LineString, Polygon, Rect};
use geojson::{GeoJson, Geometry, Value};

use super::{geometry_ops, BoundingBox, SelectionError};

/// the area of interest selected by the user. only the exterior ring of the
/// polygon takes part in any query.
#[derive(Clone, Debug, PartialEq)]
pub struct Area {
    polygon: Polygon<f64>,
}

impl Area {
    /// builds an area from the vertices of its exterior ring. the ring is closed
    /// if the first and last vertices differ.
    pub fn from_exterior(points: &[(f64, f64)]) -> Result<Self, SelectionError> {
        if points.is_empty() {
            return Err(SelectionError::InvalidArea(String::from(
                "polygon exterior ring has no vertices",
            )));
        }
        let exterior = points
            .iter()
            .map(|(x, y)| Coord { x: *x, y: *y })
            .collect::<LineString<f64>>();
        Ok(Self {
            polygon: Polygon::new(exterior, vec![]),
        })
    }

    /// reads the area from a GeoJSON document. accepts a bare geometry, a feature,
    /// or a feature collection, in which case the last feature (the most recently
    /// drawn shape) is used.
    pub fn from_geojson_str(geojson: &str) -> Result<Self, SelectionError> {
        let parsed = geojson.parse::<GeoJson>().map_err(|e| {
            SelectionError::InvalidArea(format!("failed to parse GeoJSON: {e}"))
        })?;
        let geometry = match parsed {
            GeoJson::Geometry(g) => Some(g),
            GeoJson::Feature(f) => f.geometry,
            GeoJson::FeatureCollection(fc) => fc.features.into_iter().last().and_then(|f| f.geometry),
        }
        .ok_or_else(|| {
            SelectionError::InvalidArea(String::from("GeoJSON document has no geometry"))
        })?;
        Self::try_from(&geometry)
    }

    pub fn exterior_points(&self) -> Vec<(f64, f64)> {
        self.polygon.exterior().coords().map(|c| (c.x, c.y)).collect()
    }

    pub fn bounding_box(&self) -> Result<BoundingBox, SelectionError> {
        geometry_ops::bounding_box(&self.exterior_points())
    }
}

impl TryFrom<&Geometry> for Area {
    type Error = SelectionError;

    fn try_from(geometry: &Geometry) -> Result<Self, Self::Error> {
        let rings = match &geometry.value {
            Value::Polygon(rings) => rings,
            other => {
                return Err(SelectionError::InvalidArea(format!(
                    "expected a Polygon geometry, found {}",
                    geometry_type_name(other)
                )))
            }
        };
        let exterior = rings.first().ok_or_else(|| {
            SelectionError::InvalidArea(String::from("polygon has no rings"))
        })?;
        let points = exterior
            .iter()
            .map(|position| match position.as_slice() {
                [x, y, ..] => Ok((*x, *y)),
                _ => Err(SelectionError::InvalidArea(format!(
                    "polygon position {position:?} must have at least 2 values"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_exterior(&points)
    }
}

fn geometry_type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

impl From<BoundingBox> for Area {
    fn from(bbox: BoundingBox) -> Self {
        Self {
            polygon: Rect::<f64>::from(bbox).to_polygon(),
        }
    }
}
