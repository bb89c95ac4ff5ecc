//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid amount: {0} (must be a number greater than 0)")]
    InvalidAmount(String),

    #[error("Invalid duration: {0} (must be a number of hours >= 0)")]
    InvalidDuration(String),

    #[error("No log entry with id {0}")]
    LogNotFound(i64),

    #[error("Invalid quiz answer: {0}")]
    InvalidAnswer(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for errors raised while checking user input, before any write.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidCategory(_)
                | AppError::InvalidAmount(_)
                | AppError::InvalidDuration(_)
                | AppError::LogNotFound(_)
                | AppError::InvalidAnswer(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
