use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_log, find_log};
use crate::errors::{AppError, AppResult};
use crate::models::log_entry::LogEntry;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one entry by id and return what was removed.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<LogEntry> {
        let entry = find_log(pool, id)?.ok_or(AppError::LogNotFound(id))?;

        pool.with_transaction(|tx| {
            if delete_log(tx, id)? == 0 {
                return Err(AppError::LogNotFound(id));
            }
            audit(
                tx,
                "del",
                &format!("id={id}"),
                &format!(
                    "{} | {} | {:.3} kg",
                    entry.date,
                    entry.category.label(),
                    entry.co2_kg
                ),
            )?;
            Ok(())
        })?;

        Ok(entry)
    }
}
