use chrono::NaiveDate;
use serde::de::Error;
use serde::Deserialize;
use serde::Deserializer;

use crate::model::SelectionError;

pub const APP_DATE_FORMAT: &str = "%Y-%m-%d";

/// parses a calendar date in the application date format (YYYY-MM-DD).
pub fn parse_naive_date(date_str: &str) -> Result<NaiveDate, SelectionError> {
    NaiveDate::parse_from_str(date_str.trim(), APP_DATE_FORMAT).map_err(|e| {
        SelectionError::InvalidDate {
            value: date_str.to_string(),
            format: APP_DATE_FORMAT,
            message: e.to_string(),
        }
    })
}

pub fn format_naive_date(date: &NaiveDate) -> String {
    date.format(APP_DATE_FORMAT).to_string()
}

pub fn deserialize_naive_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let date_str: String = String::deserialize(deserializer)?;
    parse_naive_date(&date_str).map_err(|e| D::Error::custom(format!("Invalid date format: {e}")))
}
