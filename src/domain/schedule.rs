//! Scheduled purchase date generation.

use chrono::{Days, NaiveDate};

use crate::domain::frequency::Frequency;

/// Lazy generator of scheduled purchase dates: start, start + I,
/// start + 2I, ... for as long as the date is on or before `end`.
#[derive(Debug, Clone)]
pub struct PurchaseSchedule {
    next: Option<NaiveDate>,
    end: NaiveDate,
    interval_days: u64,
}

impl PurchaseSchedule {
    pub fn new(start: NaiveDate, end: NaiveDate, frequency: Frequency) -> Self {
        Self {
            next: Some(start),
            end,
            interval_days: frequency.interval_days(),
        }
    }
}

impl Iterator for PurchaseSchedule {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        // checked_add_days: a calendar overflow ends the schedule.
        self.next = current.checked_add_days(Days::new(self.interval_days));
        Some(current)
    }
}
