use std::{
    fmt,
    num::{NonZeroU8, NonZeroU16},
};

use serde::{Deserialize, Serialize};

use crate::{CalendarError, CalendarSystem, MIN_DAY, rules};

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's within `1..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the value is out of range.
    pub fn new(value: i64, system: CalendarSystem) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidYear { system, year: value };
        if !rules::is_valid_year(value) {
            return Err(invalid());
        }
        let raw = u16::try_from(value).map_err(|_| invalid())?;
        NonZeroU16::new(raw).map(Self).ok_or_else(invalid)
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = CalendarError;

    // Year bounds are the same in every system; Gregorian only names the error.
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(i64::from(value), CalendarSystem::Gregorian)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to exist in the calendar system it was built for
/// (1..=12, or 1..=13 for Ethiopian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating it against the system's month count
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or past the last month.
    pub fn new(value: i64, system: CalendarSystem, year: i64) -> Result<Self, CalendarError> {
        let max = system.month_count();
        let invalid = || CalendarError::InvalidMonth {
            system,
            year,
            month: value,
            max,
        };
        let raw = u8::try_from(value).map_err(|_| invalid())?;
        if raw > max {
            return Err(invalid());
        }
        NonZeroU8::new(raw).map(Self).ok_or_else(invalid)
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given system, year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the leap-aware month length
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: i64, system: CalendarSystem, year: i64, month: i64) -> Result<Self, CalendarError> {
        let max = rules::days_in_month(system, year, month);
        let invalid = || CalendarError::InvalidDay {
            system,
            year,
            month,
            day: value,
            max,
        };
        let raw = u8::try_from(value).map_err(|_| invalid())?;
        if raw < MIN_DAY || raw > max {
            return Err(invalid());
        }
        NonZeroU8::new(raw).map(Self).ok_or_else(invalid)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: CalendarSystem = CalendarSystem::Gregorian;
    const E: CalendarSystem = CalendarSystem::Ethiopian;
    const H: CalendarSystem = CalendarSystem::Hijri;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1, G).is_ok());
        assert!(Year::new(2016, E).is_ok());
        assert!(Year::new(9999, H).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(
            Year::new(0, E),
            Err(CalendarError::InvalidYear { system: E, year: 0 })
        ));
        assert!(matches!(Year::new(10_000, G), Err(CalendarError::InvalidYear { year: 10_000, .. })));
        assert!(matches!(Year::new(-8, H), Err(CalendarError::InvalidYear { year: -8, .. })));
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024, G).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let result: Result<Year, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }

    #[test]
    fn test_month_bounds_depend_on_system() {
        assert!(Month::new(13, E, 2016).is_ok());
        assert!(matches!(
            Month::new(13, G, 2024),
            Err(CalendarError::InvalidMonth { max: 12, month: 13, .. })
        ));
        assert!(Month::new(13, H, 1446).is_err());
        assert!(Month::new(0, E, 2016).is_err());
        assert!(Month::new(300, E, 2016).is_err());
    }

    #[test]
    fn test_month_display_and_into() {
        let month = Month::new(8, G, 2024).unwrap();
        assert_eq!(month.to_string(), "8");
        let value: u8 = month.into();
        assert_eq!(value, 8);
    }

    #[test]
    fn test_day_new() {
        assert!(Day::new(29, G, 2024, 2).is_ok());
        assert!(Day::new(29, G, 2023, 2).is_err());
        assert!(Day::new(6, E, 2015, 13).is_ok());
        assert!(matches!(
            Day::new(6, E, 2016, 13),
            Err(CalendarError::InvalidDay { max: 5, day: 6, .. })
        ));
        assert!(Day::new(30, H, 1446, 12).is_ok());
        assert!(Day::new(31, H, 1446, 1).is_err());
        assert!(Day::new(0, G, 2024, 1).is_err());
    }

    #[test]
    fn test_ordering() {
        let d1 = Day::new(10, G, 2024, 8).unwrap();
        let d2 = Day::new(20, G, 2024, 8).unwrap();
        assert!(d1 < d2);
        assert_eq!(d1, d1);
    }
}
