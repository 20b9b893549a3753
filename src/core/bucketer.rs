use crate::models::week::{WeekWindow, monday_on_or_before};
use chrono::{Days, NaiveDate};

/// Finite iterator over the Monday-start weeks a worker can have worked:
/// from the Monday on/before the employment start through the Monday
/// on/before `now`, contiguous and non-overlapping.
///
/// A future employment start yields an empty iterator, which is how the
/// engine skips not-yet-started workers without special-casing them.
#[derive(Debug, Clone)]
pub struct WeekWindows {
    next_start: NaiveDate,
    last_start: NaiveDate,
    exhausted: bool,
}

pub fn week_windows(employment_start: NaiveDate, now: NaiveDate) -> WeekWindows {
    if employment_start > now {
        return WeekWindows {
            next_start: now,
            last_start: now,
            exhausted: true,
        };
    }

    WeekWindows {
        next_start: monday_on_or_before(employment_start),
        last_start: monday_on_or_before(now),
        exhausted: false,
    }
}

impl Iterator for WeekWindows {
    type Item = WeekWindow;

    fn next(&mut self) -> Option<WeekWindow> {
        if self.exhausted || self.next_start > self.last_start {
            return None;
        }

        let window = WeekWindow {
            start: self.next_start,
            end: self.next_start + Days::new(6),
        };

        self.next_start = self.next_start + Days::new(7);
        Some(window)
    }
}
