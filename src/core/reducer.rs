use crate::models::punch::PunchEvent;
use crate::models::punch_kind::PunchKind;
use crate::models::session::DailySession;
use chrono::{NaiveDate, NaiveTime};

/// Reducer state while walking a day's punches in timestamp order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShiftState {
    Idle,
    Working,
    OnBreak,
}

/// Reduce one worker's punches for one calendar date into a DailySession.
///
/// The machine is deliberately forgiving: a check-out without an open
/// check-in is ignored, a dangling check-in contributes nothing, a
/// repeated break-start simply moves the open break. Malformed sequences
/// never produce an error, only fewer counted minutes.
///
/// Net worked minutes = max(0, raw worked - total break).
pub fn reduce_day(worker_id: &str, date: NaiveDate, punches: &[PunchEvent]) -> DailySession {
    let mut session = DailySession::empty(worker_id, date);

    if punches.is_empty() {
        return session;
    }

    // Timestamp order decides everything; the store returns punches
    // sorted, but a caller-provided slice may not be.
    let mut sorted = punches.to_vec();
    sorted.sort_by_key(|p| p.timestamp());

    let mut state = ShiftState::Idle;
    let mut open_check_in: Option<NaiveTime> = None;
    let mut open_break: Option<NaiveTime> = None;
    let mut raw_worked: i64 = 0;
    let mut break_total: i64 = 0;

    for punch in &sorted {
        match (state, punch.kind) {
            (_, PunchKind::CheckIn) => {
                // A second check-in while working overwrites the open one.
                open_check_in = Some(punch.time);
                if session.first_check_in.is_none() {
                    session.first_check_in = Some(punch.time);
                }
                state = ShiftState::Working;
            }

            (ShiftState::Working | ShiftState::OnBreak, PunchKind::CheckOut) => {
                if let Some(check_in) = open_check_in.take() {
                    raw_worked += (punch.time - check_in).num_minutes();
                    state = ShiftState::Idle;
                }
            }
            (ShiftState::Idle, PunchKind::CheckOut) => {
                // no open check-in: no-op
            }

            (_, PunchKind::BreakStart) => {
                open_break = Some(punch.time);
                state = ShiftState::OnBreak;
            }

            (_, PunchKind::BreakEnd) => {
                if let Some(break_start) = open_break.take() {
                    break_total += (punch.time - break_start).num_minutes();
                    state = if open_check_in.is_some() {
                        ShiftState::Working
                    } else {
                        ShiftState::Idle
                    };
                }
                // no open break: no-op
            }
        }

        // Display fields are independent of the minute math.
        if punch.kind.is_check_out() {
            let is_latest = session.last_check_out.is_none_or(|t| punch.time > t);
            if is_latest {
                session.last_check_out = Some(punch.time);
            }
        }
    }

    session.break_minutes = break_total;
    session.worked_minutes = (raw_worked - break_total).max(0);
    session
}
