mod common;
use chrono::NaiveDate;
use common::open_test_pool;
use ecotrack::core::add::create_log;
use ecotrack::core::streak::current_streak;
use ecotrack::core::summary::SummaryLogic;
use ecotrack::models::rating::Rating;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

const TODAY: &str = "2024-03-10";

#[test]
fn test_two_good_days() {
    let mut pool = open_test_pool("streak_two_days");

    create_log(&mut pool, "2024-03-10", "bus", 10.0, 1.0, None).unwrap();
    create_log(&mut pool, "2024-03-09", "bus", 10.0, 1.0, None).unwrap();
    // gap on 03-08, older history must not count
    create_log(&mut pool, "2024-03-07", "bus", 10.0, 1.0, None).unwrap();

    assert_eq!(current_streak(&mut pool, d(TODAY)).unwrap(), 2);
}

#[test]
fn test_no_log_today_means_zero() {
    let mut pool = open_test_pool("streak_no_today");

    for day in ["2024-03-09", "2024-03-08", "2024-03-07"] {
        create_log(&mut pool, day, "cycle", 5.0, 0.5, None).unwrap();
    }

    assert_eq!(current_streak(&mut pool, d(TODAY)).unwrap(), 0);
}

#[test]
fn test_empty_store() {
    let mut pool = open_test_pool("streak_empty");
    assert_eq!(current_streak(&mut pool, d(TODAY)).unwrap(), 0);
}

#[test]
fn test_high_day_breaks_streak() {
    let mut pool = open_test_pool("streak_high_day");

    create_log(&mut pool, "2024-03-10", "bus", 10.0, 0.0, None).unwrap();
    // 40 km by car = 7.68 kg > 6.0
    create_log(&mut pool, "2024-03-09", "car", 40.0, 0.0, None).unwrap();
    create_log(&mut pool, "2024-03-08", "bus", 10.0, 0.0, None).unwrap();

    assert_eq!(current_streak(&mut pool, d(TODAY)).unwrap(), 1);
}

#[test]
fn test_exact_limit_still_counts() {
    let mut pool = open_test_pool("streak_exact_limit");

    // 31.25 km * 0.192 = 6.0 kg
    create_log(&mut pool, "2024-03-10", "car", 31.25, 0.0, None).unwrap();
    // two entries adding up to 3.07 kg
    create_log(&mut pool, "2024-03-09", "car", 10.0, 0.0, None).unwrap();
    create_log(&mut pool, "2024-03-09", "bus", 10.0, 1.0, None).unwrap();

    assert_eq!(current_streak(&mut pool, d(TODAY)).unwrap(), 2);
}

#[test]
fn test_daily_summary() {
    let mut pool = open_test_pool("streak_summary");

    create_log(&mut pool, "2024-03-09", "bus", 10.0, 1.0, None).unwrap();
    create_log(&mut pool, "2024-03-10", "car", 40.0, 0.0, None).unwrap();
    create_log(&mut pool, "2024-03-10", "bus", 10.0, 1.0, None).unwrap();

    let s = SummaryLogic::build(&mut pool, d(TODAY)).unwrap();
    assert_eq!(s.entries.len(), 2);
    assert_eq!(s.total_kg, 8.83);
    assert_eq!(s.rating, Rating::Ok);
    assert_eq!(s.streak, 0);

    let y = SummaryLogic::build(&mut pool, d("2024-03-09")).unwrap();
    assert_eq!(y.total_kg, 1.15);
    assert_eq!(y.rating, Rating::Low);
    assert_eq!(y.streak, 1);
}

#[test]
fn test_history_skips_empty_days() {
    let mut pool = open_test_pool("streak_history");

    create_log(&mut pool, "2024-03-10", "bus", 10.0, 1.0, None).unwrap();
    create_log(&mut pool, "2024-03-08", "car", 70.0, 0.0, None).unwrap();
    create_log(&mut pool, "2024-02-01", "car", 10.0, 0.0, None).unwrap();

    let rows = SummaryLogic::history(&mut pool, d(TODAY), 7).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, d("2024-03-10"));
    assert_eq!(rows[0].rating, Rating::Low);
    assert_eq!(rows[1].date, d("2024-03-08"));
    assert_eq!(rows[1].count, 1);
    assert_eq!(rows[1].total_kg, 13.44);
    assert_eq!(rows[1].rating, Rating::High);
}
