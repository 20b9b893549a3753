use chrono::{NaiveDate, NaiveTime};
use shifttally::core::reducer::reduce_day;
use shifttally::models::punch::PunchEvent;
use shifttally::models::punch_kind::PunchKind;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn punch(date: &str, time: &str, kind: PunchKind) -> PunchEvent {
    PunchEvent::new(0, "w1", d(date), t(time), kind)
}

#[test]
fn balanced_pairs_sum_exactly() {
    let punches = vec![
        punch("2025-06-02", "08:00", PunchKind::CheckIn),
        punch("2025-06-02", "12:00", PunchKind::CheckOut),
        punch("2025-06-02", "13:00", PunchKind::CheckIn),
        punch("2025-06-02", "17:30", PunchKind::CheckOut),
    ];

    let session = reduce_day("w1", d("2025-06-02"), &punches);
    assert_eq!(session.worked_minutes, 240 + 270);
    assert_eq!(session.break_minutes, 0);
    assert_eq!(session.first_check_in, Some(t("08:00")));
    assert_eq!(session.last_check_out, Some(t("17:30")));
}

#[test]
fn break_subtracted_from_worked_time() {
    // CheckIn 09:00, BreakStart 12:00, BreakEnd 12:30, CheckOut 17:00
    // -> 8h raw - 0.5h break = 7.5h
    let punches = vec![
        punch("2025-06-02", "09:00", PunchKind::CheckIn),
        punch("2025-06-02", "12:00", PunchKind::BreakStart),
        punch("2025-06-02", "12:30", PunchKind::BreakEnd),
        punch("2025-06-02", "17:00", PunchKind::CheckOut),
    ];

    let session = reduce_day("w1", d("2025-06-02"), &punches);
    assert_eq!(session.worked_minutes, 450);
    assert_eq!(session.break_minutes, 30);
}

#[test]
fn worked_minutes_never_negative() {
    // Break longer than the raw worked interval.
    let punches = vec![
        punch("2025-06-02", "09:00", PunchKind::CheckIn),
        punch("2025-06-02", "09:30", PunchKind::CheckOut),
        punch("2025-06-02", "10:00", PunchKind::BreakStart),
        punch("2025-06-02", "12:00", PunchKind::BreakEnd),
    ];

    let session = reduce_day("w1", d("2025-06-02"), &punches);
    assert_eq!(session.worked_minutes, 0);
    assert_eq!(session.break_minutes, 120);
}

#[test]
fn dangling_check_in_contributes_nothing() {
    let punches = vec![punch("2025-06-02", "09:00", PunchKind::CheckIn)];

    let session = reduce_day("w1", d("2025-06-02"), &punches);
    assert_eq!(session.worked_minutes, 0);
    assert_eq!(session.first_check_in, Some(t("09:00")));
    assert_eq!(session.last_check_out, None);
}

#[test]
fn check_out_without_check_in_is_a_no_op() {
    let punches = vec![
        punch("2025-06-02", "09:00", PunchKind::CheckOut),
        punch("2025-06-02", "10:00", PunchKind::CheckIn),
        punch("2025-06-02", "12:00", PunchKind::CheckOut),
    ];

    let session = reduce_day("w1", d("2025-06-02"), &punches);
    assert_eq!(session.worked_minutes, 120);
}

#[test]
fn break_end_without_break_start_is_a_no_op() {
    let punches = vec![
        punch("2025-06-02", "09:00", PunchKind::CheckIn),
        punch("2025-06-02", "11:00", PunchKind::BreakEnd),
        punch("2025-06-02", "17:00", PunchKind::CheckOut),
    ];

    let session = reduce_day("w1", d("2025-06-02"), &punches);
    assert_eq!(session.worked_minutes, 480);
    assert_eq!(session.break_minutes, 0);
}

#[test]
fn repeated_break_start_moves_the_open_break() {
    let punches = vec![
        punch("2025-06-02", "09:00", PunchKind::CheckIn),
        punch("2025-06-02", "11:00", PunchKind::BreakStart),
        punch("2025-06-02", "12:00", PunchKind::BreakStart),
        punch("2025-06-02", "12:30", PunchKind::BreakEnd),
        punch("2025-06-02", "17:00", PunchKind::CheckOut),
    ];

    let session = reduce_day("w1", d("2025-06-02"), &punches);
    // Only the second break-start counts: 30 minutes of break.
    assert_eq!(session.break_minutes, 30);
    assert_eq!(session.worked_minutes, 480 - 30);
}

#[test]
fn double_check_in_overwrites_the_open_one() {
    let punches = vec![
        punch("2025-06-02", "09:00", PunchKind::CheckIn),
        punch("2025-06-02", "10:00", PunchKind::CheckIn),
        punch("2025-06-02", "12:00", PunchKind::CheckOut),
    ];

    let session = reduce_day("w1", d("2025-06-02"), &punches);
    assert_eq!(session.worked_minutes, 120);
    assert_eq!(session.first_check_in, Some(t("09:00")));
}

#[test]
fn unsorted_input_is_reduced_in_timestamp_order() {
    let punches = vec![
        punch("2025-06-02", "17:00", PunchKind::CheckOut),
        punch("2025-06-02", "09:00", PunchKind::CheckIn),
    ];

    let session = reduce_day("w1", d("2025-06-02"), &punches);
    assert_eq!(session.worked_minutes, 480);
}

#[test]
fn empty_day_yields_empty_session() {
    let session = reduce_day("w1", d("2025-06-02"), &[]);
    assert_eq!(session.worked_minutes, 0);
    assert_eq!(session.break_minutes, 0);
    assert!(session.first_check_in.is_none());
    assert!(session.last_check_out.is_none());
}
