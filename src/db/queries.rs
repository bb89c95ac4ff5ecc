use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::log_entry::{LogEntry, NewLogEntry};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const DATE_FMT: &str = "%Y-%m-%d";

const SELECT_LOGS: &str =
    "SELECT id, log_date, category, amount, duration_hours, kg_co2, note FROM logs";

pub fn map_row(row: &Row) -> Result<LogEntry> {
    let date_str: String = row.get("log_date")?;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let cat_str: String = row.get("category")?;
    let category = Category::from_db_str(&cat_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidCategory(cat_str.clone())),
        )
    })?;

    Ok(LogEntry {
        id: row.get("id")?,
        date,
        category,
        amount: row.get("amount")?,
        duration_hours: row.get("duration_hours")?,
        co2_kg: row.get("kg_co2")?,
        note: row.get("note")?,
    })
}

fn collect_logs(
    conn: &Connection,
    sql: &str,
    args: &[&dyn rusqlite::ToSql],
) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new entry and return the id assigned by SQLite.
pub fn insert_log(conn: &Connection, entry: &NewLogEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO logs (log_date, category, amount, duration_hours, kg_co2, note)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.date.format(DATE_FMT).to_string(),
            entry.category.to_db_str(),
            entry.amount,
            entry.duration_hours,
            entry.co2_kg,
            entry.note,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Entries for one calendar date, newest id first.
pub fn load_logs_by_date(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Vec<LogEntry>> {
    let sql = format!("{SELECT_LOGS} WHERE log_date = ?1 ORDER BY id DESC");
    let date_str = date.format(DATE_FMT).to_string();
    collect_logs(&pool.conn, &sql, &[&date_str])
}

/// All entries (or one date's entries), newest date then newest id first.
pub fn load_logs_filtered(
    pool: &mut DbPool,
    date: Option<&NaiveDate>,
) -> AppResult<Vec<LogEntry>> {
    match date {
        Some(d) => load_logs_by_date(pool, d),
        None => {
            let sql = format!("{SELECT_LOGS} ORDER BY log_date DESC, id DESC");
            collect_logs(&pool.conn, &sql, &[])
        }
    }
}

/// Entries with `from <= date <= to`, newest date then newest id first.
pub fn load_logs_between(
    pool: &mut DbPool,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<LogEntry>> {
    let sql = format!(
        "{SELECT_LOGS} WHERE log_date >= ?1 AND log_date <= ?2 ORDER BY log_date DESC, id DESC"
    );
    let from_str = from.format(DATE_FMT).to_string();
    let to_str = to.format(DATE_FMT).to_string();
    collect_logs(&pool.conn, &sql, &[&from_str, &to_str])
}

pub fn find_log(pool: &mut DbPool, id: i64) -> AppResult<Option<LogEntry>> {
    let sql = format!("{SELECT_LOGS} WHERE id = ?1");
    let entry = pool.conn.query_row(&sql, [id], map_row).optional()?;
    Ok(entry)
}

/// Delete by id. Returns the number of removed rows (0 or 1).
pub fn delete_log(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM logs WHERE id = ?1", [id])?;
    Ok(n)
}

/// Number of entries and sum of kg CO2 for one date.
pub fn day_totals(pool: &mut DbPool, date: &NaiveDate) -> AppResult<(i64, f64)> {
    let date_str = date.format(DATE_FMT).to_string();
    let totals = pool.conn.query_row(
        "SELECT COUNT(*), IFNULL(SUM(kg_co2), 0.0) FROM logs WHERE log_date = ?1",
        [date_str],
        |row| Ok((row.get::<_, i64>(0)?, row.get::<_, f64>(1)?)),
    )?;
    Ok(totals)
}

/// Per-day `(date, count, total)` between two dates, newest first.
/// Days without entries are not returned.
pub fn load_daily_totals(
    pool: &mut DbPool,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<(NaiveDate, i64, f64)>> {
    let mut stmt = pool.conn.prepare(
        "SELECT log_date, COUNT(*), SUM(kg_co2)
         FROM logs
         WHERE log_date >= ?1 AND log_date <= ?2
         GROUP BY log_date
         ORDER BY log_date DESC",
    )?;

    let rows = stmt.query_map(
        [
            from.format(DATE_FMT).to_string(),
            to.format(DATE_FMT).to_string(),
        ],
        |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, f64>(2)?,
            ))
        },
    )?;

    let mut out = Vec::new();
    for r in rows {
        let (d, count, total) = r?;
        let date =
            NaiveDate::parse_from_str(&d, DATE_FMT).map_err(|_| AppError::InvalidDate(d.clone()))?;
        out.push((date, count, total));
    }
    Ok(out)
}
