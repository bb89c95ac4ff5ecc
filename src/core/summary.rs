use crate::core::emission::round3;
use crate::core::rating::rate;
use crate::core::streak::current_streak;
use crate::db::pool::DbPool;
use crate::db::queries::{load_daily_totals, load_logs_by_date};
use crate::errors::AppResult;
use crate::models::day_summary::{DaySummary, DayTotal};
use chrono::{Days, NaiveDate};

pub struct SummaryLogic;

impl SummaryLogic {
    /// Entries, total, rating and streak for a single day.
    pub fn build(pool: &mut DbPool, date: NaiveDate) -> AppResult<DaySummary> {
        let entries = load_logs_by_date(pool, &date)?;
        let total_kg = round3(entries.iter().map(|e| e.co2_kg).sum());
        let streak = current_streak(pool, date)?;

        Ok(DaySummary {
            date,
            entries,
            total_kg,
            rating: rate(total_kg),
            streak,
        })
    }

    /// Per-day totals for the `days` days ending at `today` (inclusive).
    pub fn history(pool: &mut DbPool, today: NaiveDate, days: u32) -> AppResult<Vec<DayTotal>> {
        let span = u64::from(days.max(1) - 1);
        let from = today.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN);

        let rows = load_daily_totals(pool, &from, &today)?;

        Ok(rows
            .into_iter()
            .map(|(date, count, total)| {
                let total_kg = round3(total);
                DayTotal {
                    date,
                    count,
                    total_kg,
                    rating: rate(total_kg),
                }
            })
            .collect())
    }
}
