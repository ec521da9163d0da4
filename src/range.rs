use std::iter;

use crate::{CalendarDate, CalendarError, prelude::*};

/// An inclusive range of days within one calendar system.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: CalendarDate,
    end:   CalendarDate,
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidRange` if the dates belong to different
    /// systems or start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, CalendarError> {
        if start.system() != end.system() {
            return Err(CalendarError::InvalidRange(format!(
                "start is a {} date but end is a {} date",
                start.system(),
                end.system()
            )));
        }
        if start > end {
            return Err(CalendarError::InvalidRange(format!(
                "start ({start}) is after end ({end})"
            )));
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Number of days in the range, both ends included
    pub fn day_count(&self) -> u64 {
        (self.end.ordinal() - self.start.ordinal() + 1).unsigned_abs()
    }

    /// Every day from start to end, stepping through the range's own system.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + use<> {
        let end = self.end;
        iter::successors(Some(self.start), |day| day.succ().ok()).take_while(move |day| *day <= end)
    }
}
