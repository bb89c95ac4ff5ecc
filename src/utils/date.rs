use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `YYYY-MM-DD` argument; `None` stays `None`.
pub fn parse_optional_date(s: Option<&String>) -> AppResult<Option<NaiveDate>> {
    match s {
        Some(raw) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(raw.to_string())),
        None => Ok(None),
    }
}

/// Parse an optional date, falling back to today.
pub fn date_or_today(s: Option<&String>) -> AppResult<NaiveDate> {
    Ok(parse_optional_date(s)?.unwrap_or_else(today))
}
