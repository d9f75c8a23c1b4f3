use geo::{BoundingRect, Coord, LineString};

use super::{BoundingBox, SelectionError};

/// derives the axis-aligned bounding box of a set of (x, y) points.
///
/// # Arguments
///
/// * `points` - ordered vertices, typically the exterior ring of a drawn polygon
///
/// # Returns
///
/// * the box `[(min_x, min_y), (max_x, max_y)]`, or an error if `points` is empty
pub fn bounding_box(points: &[(f64, f64)]) -> Result<BoundingBox, SelectionError> {
    let ring = points
        .iter()
        .map(|(x, y)| Coord { x: *x, y: *y })
        .collect::<LineString<f64>>();
    ring.bounding_rect()
        .map(BoundingBox::from)
        .ok_or(SelectionError::EmptyGeometry)
}
