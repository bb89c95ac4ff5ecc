// src/export/model.rs

use crate::models::log_entry::LogEntry;
use serde::Serialize;

/// Flat row used by CSV and JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct LogExport {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub unit: String,
    pub duration_hours: f64,
    pub kg_co2: f64,
    pub note: String,
}

impl From<&LogEntry> for LogExport {
    fn from(e: &LogEntry) -> Self {
        Self {
            id: e.id,
            date: e.date.format("%Y-%m-%d").to_string(),
            category: e.category.label().to_string(),
            amount: e.amount,
            unit: e.unit().to_string(),
            duration_hours: e.duration_hours,
            kg_co2: e.co2_kg,
            note: e.note.clone().unwrap_or_default(),
        }
    }
}
