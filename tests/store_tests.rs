mod common;
use chrono::NaiveDate;
use common::open_test_pool;
use ecotrack::core::add::{AddLogic, create_log};
use ecotrack::core::del::DeleteLogic;
use ecotrack::core::log::LogLogic;
use ecotrack::db::queries::{
    day_totals, find_log, load_logs_between, load_logs_by_date, load_logs_filtered,
};
use ecotrack::errors::AppError;
use ecotrack::models::category::Category;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_create_and_list_for_date() {
    let mut pool = open_test_pool("store_create_list");

    let id = create_log(&mut pool, "2024-01-01", "Travel: Bus", 10.0, 1.0, None).unwrap();
    assert!(id > 0);

    let entries = load_logs_by_date(&mut pool, &d("2024-01-01")).unwrap();
    assert_eq!(entries.len(), 1);

    let e = &entries[0];
    assert_eq!(e.id, id);
    assert_eq!(e.category, Category::Bus);
    assert_eq!(e.amount, 10.0);
    assert_eq!(e.duration_hours, 1.0);
    assert_eq!(e.co2_kg, 1.15);
    assert_eq!(e.note, None);
}

#[test]
fn test_note_is_trimmed_and_blank_note_dropped() {
    let mut pool = open_test_pool("store_note");

    let a = create_log(
        &mut pool,
        "2024-01-01",
        "car",
        5.0,
        0.0,
        Some("  school run ".into()),
    )
    .unwrap();
    let b = create_log(&mut pool, "2024-01-01", "car", 5.0, 0.0, Some("   ".into())).unwrap();

    assert_eq!(
        find_log(&mut pool, a).unwrap().unwrap().note.as_deref(),
        Some("school run")
    );
    assert_eq!(find_log(&mut pool, b).unwrap().unwrap().note, None);
}

#[test]
fn test_invalid_input_does_not_persist() {
    let mut pool = open_test_pool("store_invalid");
    let day = d("2024-01-01");

    let cases = [
        ("Travel: Car", 0.0, 0.0),
        ("Travel: Car", -3.0, 0.0),
        ("Travel: Car", f64::NAN, 0.0),
        ("Travel: Car", 10.0, -1.0),
        ("Travel: Car", 10.0, f64::INFINITY),
        ("Travel: Plane", 10.0, 0.0),
    ];

    for (cat, amount, hours) in cases {
        let err = AddLogic::apply(&mut pool, day, cat, amount, hours, None).unwrap_err();
        assert!(err.is_validation(), "{cat} {amount} {hours}: {err}");
    }

    assert!(load_logs_filtered(&mut pool, None).unwrap().is_empty());
    assert_eq!(day_totals(&mut pool, &day).unwrap(), (0, 0.0));
}

#[test]
fn test_huge_amount_with_non_finite_co2_is_rejected() {
    let mut pool = open_test_pool("store_huge_amount");

    let err = create_log(&mut pool, "2024-01-01", "car", 1e306, 0.0, None).unwrap_err();
    assert!(matches!(err, AppError::InvalidAmount(_)));
    assert!(load_logs_filtered(&mut pool, None).unwrap().is_empty());

    // large but representable values are still stored as finite numbers
    let id = create_log(&mut pool, "2024-01-01", "car", 1e12, 0.0, None).unwrap();
    let entry = find_log(&mut pool, id).unwrap().unwrap();
    assert!(entry.co2_kg.is_finite());
}

#[test]
fn test_amount_and_hours_checked_before_category() {
    let day = d("2024-01-01");

    let err = AddLogic::validate(day, "Travel: Plane", 0.0, 0.0, None).unwrap_err();
    assert!(matches!(err, AppError::InvalidAmount(_)));

    let err = AddLogic::validate(day, "Travel: Plane", 5.0, -1.0, None).unwrap_err();
    assert!(matches!(err, AppError::InvalidDuration(_)));

    let err = AddLogic::validate(day, "Travel: Plane", 5.0, 1.0, None).unwrap_err();
    assert!(matches!(err, AppError::InvalidCategory(_)));
}

#[test]
fn test_invalid_date_string() {
    let mut pool = open_test_pool("store_bad_date");
    let err = create_log(&mut pool, "01/02/2024", "bus", 1.0, 0.0, None).unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));
}

#[test]
fn test_filtered_ordering() {
    let mut pool = open_test_pool("store_ordering");

    let id1 = create_log(&mut pool, "2024-01-01", "car", 1.0, 0.0, None).unwrap();
    let id2 = create_log(&mut pool, "2024-01-02", "bus", 1.0, 0.0, None).unwrap();
    let id3 = create_log(&mut pool, "2024-01-01", "cycle", 1.0, 0.0, None).unwrap();

    let all: Vec<i64> = load_logs_filtered(&mut pool, None)
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(all, vec![id2, id3, id1]);

    let jan1: Vec<i64> = load_logs_filtered(&mut pool, Some(&d("2024-01-01")))
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(jan1, vec![id3, id1]);

    let between: Vec<i64> = load_logs_between(&mut pool, &d("2024-01-02"), &d("2024-01-31"))
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(between, vec![id2]);
}

#[test]
fn test_delete_only_removes_target() {
    let mut pool = open_test_pool("store_delete");

    let keep = create_log(&mut pool, "2024-01-01", "car", 10.0, 0.0, None).unwrap();
    let gone = create_log(&mut pool, "2024-01-01", "bus", 10.0, 1.0, None).unwrap();

    let removed = DeleteLogic::apply(&mut pool, gone).unwrap();
    assert_eq!(removed.id, gone);

    let ids: Vec<i64> = load_logs_filtered(&mut pool, None)
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![keep]);

    let again = DeleteLogic::apply(&mut pool, gone).unwrap_err();
    assert!(matches!(again, AppError::LogNotFound(id) if id == gone));
}

#[test]
fn test_day_totals() {
    let mut pool = open_test_pool("store_totals");

    create_log(&mut pool, "2024-01-01", "car", 10.0, 0.0, None).unwrap();
    create_log(&mut pool, "2024-01-01", "bus", 10.0, 1.0, None).unwrap();
    create_log(&mut pool, "2024-01-02", "bus", 10.0, 1.0, None).unwrap();

    let (count, total) = day_totals(&mut pool, &d("2024-01-01")).unwrap();
    assert_eq!(count, 2);
    assert!((total - 3.07).abs() < 1e-9);
}

#[test]
fn test_writes_are_audited() {
    let mut pool = open_test_pool("store_audit");

    let id = create_log(&mut pool, "2024-01-01", "car", 10.0, 0.0, None).unwrap();
    DeleteLogic::apply(&mut pool, id).unwrap();

    let ops: Vec<String> = LogLogic::load(&mut pool)
        .unwrap()
        .into_iter()
        .map(|e| e.operation)
        .collect();
    assert_eq!(ops, vec!["add".to_string(), "del".to_string()]);
}
