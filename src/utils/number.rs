//! Parsing of numeric CLI input (distance and duration).

use crate::errors::{AppError, AppResult};

/// Parse a distance. Must be a finite number greater than 0.
pub fn parse_amount(raw: &str) -> AppResult<f64> {
    let v: f64 = raw
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| AppError::InvalidAmount(raw.to_string()))?;
    if !v.is_finite() || v <= 0.0 {
        return Err(AppError::InvalidAmount(raw.to_string()));
    }
    Ok(v)
}

/// Parse a duration in hours. Empty input means 0; otherwise a finite number >= 0.
pub fn parse_hours(raw: Option<&str>) -> AppResult<f64> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(0.0);
    };
    let v: f64 = raw
        .replace(',', ".")
        .parse()
        .map_err(|_| AppError::InvalidDuration(raw.to_string()))?;
    if !v.is_finite() || v < 0.0 {
        return Err(AppError::InvalidDuration(raw.to_string()));
    }
    Ok(v)
}
