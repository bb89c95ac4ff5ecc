use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `audit_log` table used for internal operation logging.
fn ensure_audit_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS audit_log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// Create the `logs` table holding travel entries.
fn ensure_logs_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS logs (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            log_date       TEXT NOT NULL,
            category       TEXT NOT NULL,
            amount         REAL NOT NULL,
            duration_hours REAL NOT NULL DEFAULT 0,
            kg_co2         REAL NOT NULL,
            note           TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_logs_date ON logs(log_date);
        "#,
    )
}

/// Initialize the database.
/// Idempotent: existing tables are left untouched, nothing is upgraded.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    ensure_audit_table(conn)?;
    ensure_logs_table(conn)?;
    Ok(())
}
