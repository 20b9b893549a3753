use chrono::{NaiveDate, NaiveTime};
use shifttally::core::payroll::{PayRules, compose_week, daily_detail};
use shifttally::models::payroll::PayrollStatus;
use shifttally::models::session::DailySession;
use shifttally::models::week::WeekWindow;

const EPS: f64 = 1e-9;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn rules() -> PayRules {
    PayRules {
        bonus_amount: 75.0,
        deduction_amount: 40.0,
        payout_offset_days: 7,
    }
}

fn week_sessions(minutes_per_day: [i64; 7]) -> (WeekWindow, Vec<DailySession>) {
    let window = WeekWindow::containing(d("2025-06-02"));
    let sessions = window
        .days()
        .zip(minutes_per_day)
        .map(|(date, worked_minutes)| DailySession {
            worked_minutes,
            ..DailySession::empty("w1", date)
        })
        .collect();
    (window, sessions)
}

#[test]
fn under_required_hours_applies_deduction() {
    // 35 h worked against a 40 h contract.
    let (window, sessions) = week_sessions([420, 420, 420, 420, 420, 0, 0]);

    let (record, _) = compose_week("w1", &window, &sessions, 40.0, &rules(), d("2025-06-09"));

    assert_eq!(record.deductions, 40.0);
    assert_eq!(record.bonus, 0.0);
}

#[test]
fn over_required_hours_applies_bonus() {
    // 45 h worked against a 40 h contract.
    let (window, sessions) = week_sessions([540, 540, 540, 540, 540, 0, 0]);

    let (record, _) = compose_week("w1", &window, &sessions, 40.0, &rules(), d("2025-06-09"));

    assert_eq!(record.bonus, 75.0);
    assert_eq!(record.deductions, 0.0);
}

#[test]
fn exactly_required_hours_applies_neither() {
    // 40 h exactly.
    let (window, sessions) = week_sessions([480, 480, 480, 480, 480, 0, 0]);

    let (record, _) = compose_week("w1", &window, &sessions, 40.0, &rules(), d("2025-06-09"));

    assert_eq!(record.bonus, 0.0);
    assert_eq!(record.deductions, 0.0);
}

#[test]
fn total_amount_is_the_sum_of_daily_base_salaries() {
    let (window, mut sessions) = week_sessions([450, 480, 0, 0, 0, 0, 0]);
    sessions[0].break_minutes = 30;

    let (record, details) =
        compose_week("w1", &window, &sessions, 40.0, &rules(), d("2025-06-09"));

    assert_eq!(details.len(), 7);
    // Monday: 7.5 worked - 0.5 break = 7.0; Tuesday: 8.0 - 0 = 8.0.
    assert!((details[0].base_salary - 7.0).abs() < EPS);
    assert!((details[1].base_salary - 8.0).abs() < EPS);
    assert!((record.total_amount - 15.0).abs() < EPS);
}

#[test]
fn record_defaults_to_pending_with_offset_payout_date() {
    let (window, sessions) = week_sessions([480, 0, 0, 0, 0, 0, 0]);

    let (record, _) = compose_week("w1", &window, &sessions, 40.0, &rules(), d("2025-06-09"));

    assert_eq!(record.status, PayrollStatus::Pending);
    assert_eq!(record.expected_date, d("2025-06-16"));
    assert_eq!(record.period_start, window.start);
    assert_eq!(record.period_end, window.end);
    assert_eq!(record.worker_id, "w1");
}

#[test]
fn daily_detail_carries_display_times_and_week_bounds() {
    let window = WeekWindow::containing(d("2025-06-02"));
    let session = DailySession {
        worked_minutes: 450,
        break_minutes: 30,
        first_check_in: Some(t("09:00")),
        last_check_out: Some(t("17:00")),
        ..DailySession::empty("w1", d("2025-06-02"))
    };

    let detail = daily_detail(&session, &window);

    assert_eq!(detail.start, Some(t("09:00")));
    assert_eq!(detail.finish, Some(t("17:00")));
    assert!((detail.worked_hours - 7.5).abs() < EPS);
    assert!((detail.break_hours - 0.5).abs() < EPS);
    assert!((detail.base_salary - 7.0).abs() < EPS);
    assert_eq!(detail.week_start, window.start);
    assert_eq!(detail.week_end, window.end);
}
