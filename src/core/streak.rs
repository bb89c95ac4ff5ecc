use crate::core::rating::GOOD_LIMIT;
use crate::db::pool::DbPool;
use crate::db::queries::day_totals;
use crate::errors::AppResult;
use chrono::NaiveDate;

/// Count consecutive good days ending at `today`.
///
/// Walks backward one day at a time and stops at the first day that has no
/// entries or whose total exceeds GOOD_LIMIT. That day is not counted.
pub fn current_streak(pool: &mut DbPool, today: NaiveDate) -> AppResult<u32> {
    let mut streak = 0;
    let mut day = today;

    loop {
        let (count, total) = day_totals(pool, &day)?;
        if count == 0 || total > GOOD_LIMIT {
            break;
        }
        streak += 1;

        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }

    Ok(streak)
}
