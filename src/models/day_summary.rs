use crate::models::log_entry::LogEntry;
use crate::models::rating::Rating;
use chrono::NaiveDate;

#[derive(Debug)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub entries: Vec<LogEntry>,
    pub total_kg: f64,
    pub rating: Rating,
    pub streak: u32,
}

/// One row of the multi-day history view.
#[derive(Debug, Clone, PartialEq)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub count: i64,
    pub total_kg: f64,
    pub rating: Rating,
}
