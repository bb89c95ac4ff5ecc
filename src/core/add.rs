use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_log;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::log_entry::NewLogEntry;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Check raw inputs and build the row to insert, including its CO2 value.
    /// Nothing touches the database here.
    pub fn validate(
        date: NaiveDate,
        category: &str,
        amount: f64,
        hours: f64,
        note: Option<String>,
    ) -> AppResult<NewLogEntry> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::InvalidAmount(amount.to_string()));
        }
        if !hours.is_finite() || hours < 0.0 {
            return Err(AppError::InvalidDuration(hours.to_string()));
        }

        let category = Category::from_code(category)
            .ok_or_else(|| AppError::InvalidCategory(category.to_string()))?;

        // very large inputs overflow once scaled for rounding
        let co2_kg = category.emission(amount, hours);
        if !co2_kg.is_finite() {
            return Err(AppError::InvalidAmount(amount.to_string()));
        }

        let note = note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(NewLogEntry {
            date,
            category,
            amount,
            duration_hours: hours,
            co2_kg,
            note,
        })
    }

    /// Validate, persist and audit a new entry in a single transaction.
    /// Returns the id assigned by the store.
    pub fn apply(
        pool: &mut DbPool,
        date: NaiveDate,
        category: &str,
        amount: f64,
        hours: f64,
        note: Option<String>,
    ) -> AppResult<i64> {
        let entry = Self::validate(date, category, amount, hours, note)?;

        pool.with_transaction(|tx| {
            let id = insert_log(tx, &entry)?;
            audit(
                tx,
                "add",
                &format!("id={id}"),
                &format!(
                    "{} | {} | {} km | {} h | {:.3} kg",
                    entry.date,
                    entry.category.label(),
                    entry.amount,
                    entry.duration_hours,
                    entry.co2_kg
                ),
            )?;
            Ok(id)
        })
    }
}

/// Convenience entry point: create a log from textual date and category.
pub fn create_log(
    pool: &mut DbPool,
    date: &str,
    category: &str,
    amount: f64,
    hours: f64,
    note: Option<String>,
) -> AppResult<i64> {
    let d = crate::utils::date::parse_date(date)
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    AddLogic::apply(pool, d, category, amount, hours, note)
}
