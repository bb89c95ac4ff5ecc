use crate::models::category::Category;
use chrono::NaiveDate;
use serde::Serialize;

/// One recorded travel activity.
///
/// `co2_kg` is computed once at insert time and stored alongside the inputs;
/// it is never recomputed, so older rows keep the factors they were created with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub category: Category,
    pub amount: f64,
    pub duration_hours: f64,
    pub co2_kg: f64,
    pub note: Option<String>,
}

/// Validated input for a new log entry (no id yet).
#[derive(Debug, Clone, PartialEq)]
pub struct NewLogEntry {
    pub date: NaiveDate,
    pub category: Category,
    pub amount: f64,
    pub duration_hours: f64,
    pub co2_kg: f64,
    pub note: Option<String>,
}

impl LogEntry {
    pub fn unit(&self) -> &'static str {
        crate::core::emission::factor_for(self.category).unit
    }
}
