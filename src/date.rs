use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::{
    CalendarError, CalendarSystem, rules,
    types::{Day, Month, Year},
    validate,
};

/// A day in one of the supported calendar systems.
///
/// Construction validates the year bound, the system's month count and the
/// leap-aware month length; an out-of-range component is rejected, never clamped.
/// Ordering is only meaningful between dates of the same system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateParts", into = "DateParts")]
pub struct CalendarDate {
    system: CalendarSystem,
    year:   Year,
    month:  Month,
    day:    Day,
}

/// Serialized form of [`CalendarDate`]; deserialization goes through [`CalendarDate::new`].
#[derive(Serialize, Deserialize)]
struct DateParts {
    system: CalendarSystem,
    year:   i64,
    month:  i64,
    day:    i64,
}

impl CalendarDate {
    /// Creates a validated date.
    ///
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay` naming the first
    /// offending component.
    pub fn new(system: CalendarSystem, year: i64, month: i64, day: i64) -> Result<Self, CalendarError> {
        Ok(Self {
            system,
            year: Year::new(year, system)?,
            month: Month::new(month, system, year)?,
            day: Day::new(day, system, year, month)?,
        })
    }

    /// Parses a `YYYY-MM-DD` string as a date in `system`.
    ///
    /// # Errors
    /// Returns `MalformedDate` for a bad shape, or an invalid-date error for out-of-range components.
    pub fn parse(system: CalendarSystem, input: &str) -> Result<Self, CalendarError> {
        validate::parse(input, system)
    }

    pub(crate) fn from_gregorian_date(date: NaiveDate) -> Result<Self, CalendarError> {
        Self::new(
            CalendarSystem::Gregorian,
            i64::from(date.year()),
            i64::from(date.month()),
            i64::from(date.day()),
        )
    }

    pub const fn system(&self) -> CalendarSystem {
        self.system
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// (year, month, day) widened for arithmetic
    pub const fn parts(&self) -> (i64, i64, i64) {
        (self.year.get() as i64, self.month.get() as i64, self.day.get() as i64)
    }

    pub const fn is_leap_year(&self) -> bool {
        rules::is_leap_year(self.system, self.year.get() as i64)
    }

    pub const fn days_in_month(&self) -> u8 {
        rules::days_in_month(self.system, self.year.get() as i64, self.month.get() as i64)
    }

    pub fn month_name(&self) -> &'static str {
        self.system.month_name(self.month.get()).unwrap_or_default()
    }

    /// # Errors
    /// See [`CalendarSystem::to_gregorian`].
    pub fn to_gregorian(&self) -> Result<NaiveDate, CalendarError> {
        self.system.to_gregorian(self)
    }

    /// Returns the same day expressed in `target`.
    ///
    /// # Errors
    /// Returns `CalendarError::Conversion` if the day cannot be represented in `target`.
    pub fn convert_to(&self, target: CalendarSystem) -> Result<Self, CalendarError> {
        if target == self.system {
            return Ok(*self);
        }
        target.from_gregorian(self.to_gregorian()?)
    }

    /// The Gregorian weekday this day falls on.
    ///
    /// # Errors
    /// See [`CalendarSystem::to_gregorian`].
    pub fn weekday(&self) -> Result<Weekday, CalendarError> {
        self.to_gregorian().map(|date| date.weekday())
    }

    /// 1-based count of days since 0001-01-01 of this date's own system.
    ///
    /// Differences between ordinals of two dates in the same system give the
    /// number of days between them in that system.
    pub fn ordinal(&self) -> i64 {
        let (year, month, day) = self.parts();
        let before_year = match self.system {
            CalendarSystem::Gregorian => {
                let y = year - 1;
                365 * y + y / 4 - y / 100 + y / 400
            },
            CalendarSystem::Ethiopian => 365 * (year - 1) + year / 4,
            CalendarSystem::Hijri => 360 * (year - 1),
        };
        let before_month: i64 = (1..month)
            .map(|m| i64::from(rules::days_in_month(self.system, year, m)))
            .sum();
        before_year + before_month + day
    }

    /// The next day in this date's own system.
    ///
    /// # Errors
    /// Returns `InvalidYear` when stepping past year 9999.
    pub fn succ(&self) -> Result<Self, CalendarError> {
        let (y, m, d) = self.parts();
        let (y, m, d) = rules::next_day(self.system, y, m, d);
        Self::new(self.system, y, m, d)
    }

    /// The previous day in this date's own system.
    ///
    /// # Errors
    /// Returns `InvalidYear` when stepping before year 1.
    pub fn pred(&self) -> Result<Self, CalendarError> {
        let (y, m, d) = self.parts();
        let (y, m, d) = rules::previous_day(self.system, y, m, d);
        Self::new(self.system, y, m, d)
    }

    /// Human-readable, month-named rendering, e.g. `December 25, 2024`,
    /// `16 Taḫśaś 2017` or `26 Jumādā al-Thāniya 1446 AH`.
    pub fn formatted(&self) -> String {
        let (name, day, year) = (self.month_name(), self.day(), self.year());
        match self.system {
            CalendarSystem::Gregorian => format!("{name} {day}, {year}"),
            CalendarSystem::Ethiopian => format!("{day} {name} {year}"),
            CalendarSystem::Hijri => format!("{day} {name} {year} AH"),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl TryFrom<DateParts> for CalendarDate {
    type Error = CalendarError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Self::new(parts.system, parts.year, parts.month, parts.day)
    }
}

impl From<CalendarDate> for DateParts {
    fn from(date: CalendarDate) -> Self {
        let (year, month, day) = date.parts();
        Self {
            system: date.system,
            year,
            month,
            day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: CalendarSystem = CalendarSystem::Gregorian;
    const E: CalendarSystem = CalendarSystem::Ethiopian;
    const H: CalendarSystem = CalendarSystem::Hijri;

    #[test]
    fn test_new_rejects_instead_of_clamping() {
        assert!(CalendarDate::new(E, 2016, 13, 5).is_ok());
        let result = CalendarDate::new(E, 2016, 13, 6);
        assert!(matches!(result, Err(CalendarError::InvalidDay { day: 6, max: 5, .. })));

        assert!(matches!(
            CalendarDate::new(G, 2024, 13, 1),
            Err(CalendarError::InvalidMonth { .. })
        ));
        assert!(matches!(CalendarDate::new(H, 0, 1, 1), Err(CalendarError::InvalidYear { .. })));
    }

    #[test]
    fn test_accessors_and_display() {
        let date = CalendarDate::new(E, 2017, 4, 16).unwrap();
        assert_eq!(date.system(), E);
        assert_eq!((date.year(), date.month(), date.day()), (2017, 4, 16));
        assert_eq!(date.parts(), (2017, 4, 16));
        assert_eq!(date.to_string(), "2017-04-16");
        assert_eq!(CalendarDate::new(G, 33, 1, 2).unwrap().to_string(), "0033-01-02");
    }

    #[test]
    fn test_formatted() {
        assert_eq!(CalendarDate::new(G, 2024, 12, 25).unwrap().formatted(), "December 25, 2024");
        assert_eq!(CalendarDate::new(E, 2017, 4, 16).unwrap().formatted(), "16 Taḫśaś 2017");
        assert_eq!(CalendarDate::new(H, 1446, 9, 1).unwrap().formatted(), "1 Ramaḍān 1446 AH");
    }

    #[test]
    fn test_succ_and_pred_cross_pagume() {
        let last_nehase = CalendarDate::new(E, 2016, 12, 30).unwrap();
        let first_pagume = last_nehase.succ().unwrap();
        assert_eq!(first_pagume, CalendarDate::new(E, 2016, 13, 1).unwrap());

        let last_pagume = CalendarDate::new(E, 2016, 13, 5).unwrap();
        let new_year = last_pagume.succ().unwrap();
        assert_eq!(new_year, CalendarDate::new(E, 2017, 1, 1).unwrap());
        assert_eq!(new_year.pred().unwrap(), last_pagume);
    }

    #[test]
    fn test_succ_past_max_year_fails() {
        let last = CalendarDate::new(G, 9999, 12, 31).unwrap();
        assert!(last.succ().is_err());
        let first = CalendarDate::new(G, 1, 1, 1).unwrap();
        assert!(first.pred().is_err());
    }

    #[test]
    fn test_weekday_and_convert_to() {
        let christmas = CalendarDate::new(G, 2024, 12, 25).unwrap();
        assert_eq!(christmas.weekday().unwrap(), Weekday::Wed);

        let ethiopian = christmas.convert_to(E).unwrap();
        assert_eq!(ethiopian, CalendarDate::new(E, 2017, 4, 16).unwrap());
        assert_eq!(ethiopian.weekday().unwrap(), Weekday::Wed);
        assert_eq!(christmas.convert_to(G).unwrap(), christmas);
    }

    #[test]
    fn test_serde_validates() {
        let date = CalendarDate::new(E, 2015, 13, 6).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"system":"ethiopian","year":2015,"month":13,"day":6}"#);

        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);

        let invalid = r#"{"system":"ethiopian","year":2016,"month":13,"day":6}"#;
        assert!(serde_json::from_str::<CalendarDate>(invalid).is_err());
    }

    #[test]
    fn test_ordinal_counts_days_in_system() {
        assert_eq!(CalendarDate::new(G, 1, 1, 1).unwrap().ordinal(), 1);
        let christmas = CalendarDate::new(G, 2024, 12, 25).unwrap();
        assert_eq!(christmas.ordinal(), i64::from(christmas.to_gregorian().unwrap().num_days_from_ce()));

        let pagume = CalendarDate::new(E, 2016, 13, 5).unwrap();
        assert_eq!(pagume.succ().unwrap().ordinal() - pagume.ordinal(), 1);
        assert_eq!(
            CalendarDate::new(E, 2017, 1, 1).unwrap().ordinal() - CalendarDate::new(E, 2016, 1, 1).unwrap().ordinal(),
            365
        );
        assert_eq!(
            CalendarDate::new(E, 2016, 1, 1).unwrap().ordinal() - CalendarDate::new(E, 2015, 1, 1).unwrap().ordinal(),
            366
        );
        assert_eq!(
            CalendarDate::new(H, 1447, 1, 1).unwrap().ordinal() - CalendarDate::new(H, 1446, 1, 1).unwrap().ordinal(),
            360
        );
    }

    #[test]
    fn test_ordering_within_system() {
        let a = CalendarDate::new(H, 1445, 12, 30).unwrap();
        let b = CalendarDate::new(H, 1446, 1, 1).unwrap();
        assert!(a < b);
    }
}
