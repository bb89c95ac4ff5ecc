use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL ENTRIES AND CO2
    //
    let (count, total): (i64, f64) = pool.conn.query_row(
        "SELECT COUNT(*), IFNULL(SUM(kg_co2), 0.0) FROM logs",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );
    println!("{}• Total CO2:{} {:.3} kg", CYAN, RESET, total);

    //
    // 3) DATE RANGE
    //
    let (first, last): (Option<String>, Option<String>) = pool.conn.query_row(
        "SELECT MIN(log_date), MAX(log_date) FROM logs",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    let range = first.zip(last);

    let (fmt_first, fmt_last) = match &range {
        Some((f, l)) => (f.clone(), l.clone()),
        None => (format!("{GREY}--{RESET}"), format!("{GREY}--{RESET}")),
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE CO2/DAY
    //
    if let Some((f, l)) = range
        && let (Ok(d1), Ok(d2)) = (
            NaiveDate::parse_from_str(&f, "%Y-%m-%d"),
            NaiveDate::parse_from_str(&l, "%Y-%m-%d"),
        )
    {
        let days = (d2 - d1).num_days() + 1;
        let avg = total / days as f64;
        println!("{}• Average CO2/day:{} {:.3} kg", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
