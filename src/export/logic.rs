// src/export/logic.rs

use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{load_logs_between, load_logs_filtered};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::LogExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export log entries to `file`.
    ///
    /// `range` is `None`, `"all"` or any expression accepted by `parse_range`.
    /// Rows are written newest date first, like `list`.
    /// Returns the number of exported rows.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let entries = match range {
            None => load_logs_filtered(pool, None)?,
            Some(r) if r.eq_ignore_ascii_case("all") => load_logs_filtered(pool, None)?,
            Some(r) => {
                let (from, to) = parse_range(r)?;
                load_logs_between(pool, &from, &to)?
            }
        };

        if entries.is_empty() {
            warning("No log entries found for the selected range.");
            return Ok(0);
        }

        let rows: Vec<LogExport> = entries.iter().map(LogExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        if let Err(e) = audit(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} rows as {}", rows.len(), format.as_str()),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(rows.len())
    }
}
