use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::formatting::{colored_rating, format_kg};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { days } = cmd {
        let days = days.unwrap_or(cfg.history_days).max(1);
        let today = date::today();

        let mut pool = DbPool::open(&cfg.database)?;
        let rows = SummaryLogic::history(&mut pool, today, days)?;

        header(format!("Last {} day(s)", days));

        if rows.is_empty() {
            println!("No entries in the last {} day(s).", days);
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("DATE"),
            Column::right("ENTRIES"),
            Column::right("TOTAL"),
            Column::left("RATING"),
        ]);
        for r in &rows {
            table.add_row(vec![
                r.date.to_string(),
                r.count.to_string(),
                format_kg(r.total_kg),
                colored_rating(r.rating),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
