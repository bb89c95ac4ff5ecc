use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::{format_kg, format_quantity};
use crate::utils::number::{parse_amount, parse_hours};

/// Record a new travel activity.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        category,
        amount,
        hours,
        note,
    } = cmd
    {
        //
        // 1. Parse and validate every input before opening the DB
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let amount = parse_amount(amount)?;
        let hours = parse_hours(hours.as_deref())?;
        let entry = AddLogic::validate(d, category, amount, hours, note.clone())?;

        //
        // 2. Persist
        //
        let mut pool = DbPool::open(&cfg.database)?;
        let id = AddLogic::apply(
            &mut pool,
            entry.date,
            entry.category.label(),
            entry.amount,
            entry.duration_hours,
            entry.note,
        )?;

        success(format!(
            "Added #{id}: {} | {} | {} km | {} h → {}",
            entry.date,
            entry.category.label(),
            format_quantity(entry.amount),
            format_quantity(entry.duration_hours),
            format_kg(entry.co2_kg)
        ));
    }

    Ok(())
}
