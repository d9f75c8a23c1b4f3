use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SelectionError;
use crate::util::date_deserialization_ops::format_naive_date;

/// first day offered by the date range selector
pub const CATALOG_WINDOW_START: NaiveDate = match NaiveDate::from_ymd_opt(1993, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// last day offered by the date range selector
pub const CATALOG_WINDOW_END: NaiveDate = match NaiveDate::from_ymd_opt(2020, 5, 1) {
    Some(date) => date,
    None => NaiveDate::MAX,
};

/// an inclusive range of calendar dates where `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DateRangeRecord")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct DateRangeRecord {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<DateRangeRecord> for DateRange {
    type Error = SelectionError;

    fn try_from(value: DateRangeRecord) -> Result<Self, Self::Error> {
        DateRange::new(value.start, value.end)
    }
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, SelectionError> {
        if end < start {
            return Err(SelectionError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// the full span of dates that can be selected, 1993-01-01 through 2020-05-01.
    pub fn catalog_window() -> Self {
        Self {
            start: CATALOG_WINDOW_START,
            end: CATALOG_WINDOW_END,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// number of days covered, counting both endpoints
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn within(&self, window: &DateRange) -> bool {
        window.start <= self.start && self.end <= window.end
    }

    /// returns self if it lies within the window, otherwise an error.
    pub fn ensure_within(self, window: &DateRange) -> Result<Self, SelectionError> {
        if self.within(window) {
            Ok(self)
        } else {
            Err(SelectionError::DateOutsideWindow {
                start: self.start,
                end: self.end,
                window_start: window.start,
                window_end: window.end,
            })
        }
    }

    /// order service format, `YYYY-MM-DD,YYYY-MM-DD`
    pub fn to_time_range(&self) -> String {
        format!(
            "{},{}",
            format_naive_date(&self.start),
            format_naive_date(&self.end)
        )
    }

    /// granule catalog temporal format. the end date is included through its last second.
    pub fn to_temporal(&self) -> String {
        format!(
            "{}T00:00:00Z,{}T23:59:59Z",
            format_naive_date(&self.start),
            format_naive_date(&self.end)
        )
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::catalog_window()
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_start_after_end_rejected() {
        let result = DateRange::new(date(2015, 6, 1), date(2015, 1, 1));
        assert!(matches!(
            result,
            Err(SelectionError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(date(2015, 1, 1), date(2015, 1, 1)).unwrap();
        assert_eq!(range.num_days(), 1);
        assert_eq!(range.to_time_range(), "2015-01-01,2015-01-01");
    }

    #[test]
    fn test_formats() {
        let range = DateRange::new(date(2015, 1, 1), date(2015, 6, 1)).unwrap();
        assert_eq!(range.to_time_range(), "2015-01-01,2015-06-01");
        assert_eq!(
            range.to_temporal(),
            "2015-01-01T00:00:00Z,2015-06-01T23:59:59Z"
        );
    }

    #[test]
    fn test_catalog_window() {
        let window = DateRange::default();
        assert_eq!(window.start(), date(1993, 1, 1));
        assert_eq!(window.end(), date(2020, 5, 1));
        let inside = DateRange::new(date(2015, 1, 1), date(2015, 6, 1)).unwrap();
        assert!(inside.ensure_within(&window).is_ok());
        let outside = DateRange::new(date(2019, 1, 1), date(2021, 1, 1)).unwrap();
        assert!(matches!(
            outside.ensure_within(&window),
            Err(SelectionError::DateOutsideWindow { .. })
        ));
    }

    #[test]
    fn test_deserialize_checks_order() {
        let ok: DateRange =
            serde_json::from_str(r#"{"start": "2010-03-01", "end": "2010-04-01"}"#).unwrap();
        assert_eq!(ok.num_days(), 32);
        let bad = serde_json::from_str::<DateRange>(r#"{"start": "2010-04-01", "end": "2010-03-01"}"#);
        assert!(bad.is_err());
    }
}
