use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::find_log;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::format_kg;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;

        //
        // The entry must exist before we ask anything
        //
        let entry = find_log(&mut pool, *id)?.ok_or(AppError::LogNotFound(*id))?;

        let prompt = format!(
            "Delete entry #{} ({} | {} | {})? This action is irreversible.",
            entry.id,
            entry.date,
            entry.category.label(),
            format_kg(entry.co2_kg)
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(&mut pool, *id)?;
        success(format!("Entry #{} for {} has been deleted.", removed.id, removed.date));
    }

    Ok(())
}
