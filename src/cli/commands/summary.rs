use crate::cli::commands::list::render_entries;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rating::{GOOD_LIMIT, OK_LIMIT};
use crate::core::summary::SummaryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::formatting::{colored_rating, format_kg, separator};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { date: d } = cmd {
        let day = date::date_or_today(d.as_ref())?;

        let mut pool = DbPool::open(&cfg.database)?;
        let summary = SummaryLogic::build(&mut pool, day)?;

        header(format!("Summary for {}", summary.date));

        if summary.entries.is_empty() {
            println!("No entries for {}", summary.date);
        } else {
            print!("{}", render_entries(&summary.entries));
        }

        println!("{}", separator(&cfg.separator_char, 40));
        println!("Total:  {}", format_kg(summary.total_kg));
        println!(
            "Rating: {} ({})",
            colored_rating(summary.rating),
            summary.rating.describe()
        );
        println!(
            "        LOW ≤ {:.1} kg < OK ≤ {:.1} kg < HIGH",
            GOOD_LIMIT, OK_LIMIT
        );
        println!("Streak: {} day(s)", summary.streak);
    }
    Ok(())
}
