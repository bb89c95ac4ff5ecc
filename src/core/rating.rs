use crate::models::rating::Rating;

/// Daily totals at or below this are a "good" day and keep the streak alive.
pub const GOOD_LIMIT: f64 = 6.0;
/// Daily totals at or below this (and above GOOD_LIMIT) are acceptable.
pub const OK_LIMIT: f64 = 12.0;

pub fn rate(total_kg: f64) -> Rating {
    if total_kg <= GOOD_LIMIT {
        Rating::Low
    } else if total_kg <= OK_LIMIT {
        Rating::Ok
    } else {
        Rating::High
    }
}
