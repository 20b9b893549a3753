use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// A Monday-to-Sunday calendar bucket, the unit of aggregation.
/// Derived by the week bucketer, never persisted as its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekWindow {
    pub start: NaiveDate, // always a Monday, inclusive
    pub end: NaiveDate,   // the following Sunday, inclusive
}

impl WeekWindow {
    /// Build the window containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let start = monday_on_or_before(date);
        Self {
            start,
            end: start + Days::new(6),
        }
    }

    /// The seven calendar dates of this window, Monday first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..7).map(|i| self.start + Days::new(i))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Snap a date back to the Monday of its ISO week.
pub fn monday_on_or_before(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_monday() as u64;
    date - Days::new(back)
}
