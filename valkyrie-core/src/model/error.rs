use chrono::NaiveDate;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("cannot compute a bounding box from an empty set of points")]
    EmptyGeometry,
    #[error("invalid date range: start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error(
        "date range {start}..{end} falls outside of the available window {window_start}..{window_end}"
    )]
    DateOutsideWindow {
        start: NaiveDate,
        end: NaiveDate,
        window_start: NaiveDate,
        window_end: NaiveDate,
    },
    #[error("failed reading date value '{value}', required format: '{format}': {message}")]
    InvalidDate {
        value: String,
        format: &'static str,
        message: String,
    },
    #[error("invalid area: {0}")]
    InvalidArea(String),
    #[error("unknown dataset code '{0}', expected one of ATM, GLAH06, ILVIS2")]
    UnknownDataset(String),
    #[error("unknown reference frame '{0}', expected one of ITRF2000, ITRF2008, ITRF2014")]
    UnknownItrf(String),
}
