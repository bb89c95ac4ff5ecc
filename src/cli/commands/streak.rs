use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rating::GOOD_LIMIT;
use crate::core::streak::current_streak;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Streak { date: d } = cmd {
        let day = date::date_or_today(d.as_ref())?;

        let mut pool = DbPool::open(&cfg.database)?;
        let streak = current_streak(&mut pool, day)?;

        if streak == 0 {
            println!(
                "🔥 Streak: 0 days (log a trip under {:.1} kg on {} to start one)",
                GOOD_LIMIT, day
            );
        } else {
            println!("🔥 Streak: {} day(s) ending {}", streak, day);
        }
    }
    Ok(())
}
