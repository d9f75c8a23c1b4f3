use super::{QueryParameters, Selection, SelectionError};

/// message reported when an operation needs an area but none has been selected
pub const MISSING_AREA_MESSAGE: &str = "You need to select an area using the box tool";

/// builds the order service parameters from the current selection.
///
/// returns `Ok(None)` and logs a warning when no area has been selected.
pub fn build_params(selection: &Selection) -> Result<Option<QueryParameters>, SelectionError> {
    let area = match &selection.area {
        Some(area) => area,
        None => {
            log::warn!("{MISSING_AREA_MESSAGE}");
            return Ok(None);
        }
    };
    let bbox = area.bounding_box()?;
    let params = QueryParameters::new(&selection.date_range, &bbox, selection.itrf);
    log::debug!("built order parameters {params:?}");
    Ok(Some(params))
}
