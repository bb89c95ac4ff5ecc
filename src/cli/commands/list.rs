use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_logs_filtered;
use crate::errors::AppResult;
use crate::models::log_entry::LogEntry;
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::{format_kg, format_quantity};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date: d, now } = cmd {
        let filter = if *now {
            Some(date::today())
        } else {
            date::parse_optional_date(d.as_ref())?
        };

        let mut pool = DbPool::open(&cfg.database)?;
        let entries = load_logs_filtered(&mut pool, filter.as_ref())?;

        if entries.is_empty() {
            match filter {
                Some(day) => println!("No entries for {}", day),
                None => println!("No entries recorded yet."),
            }
            return Ok(());
        }

        print!("{}", render_entries(&entries));
    }
    Ok(())
}

/// Tabular view shared by `list` and `summary`.
pub fn render_entries(entries: &[LogEntry]) -> String {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("DATE"),
        Column::left("CATEGORY"),
        Column::right("AMOUNT"),
        Column::right("HOURS"),
        Column::right("CO2"),
        Column::left("NOTE"),
    ]);

    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            e.date.to_string(),
            e.category.label().to_string(),
            format!("{} {}", format_quantity(e.amount), e.unit()),
            format_quantity(e.duration_hours),
            format_kg(e.co2_kg),
            colorize_optional(e.note.as_deref().unwrap_or("")),
        ]);
    }

    table.render()
}
