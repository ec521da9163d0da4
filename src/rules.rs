//! Month counts, month lengths and leap rules for each calendar system.
//!
//! All functions take raw `i64` components so callers can ask about
//! neighbouring months (year 0, month 14) without constructing a date first.

use crate::{
    CENTURY_CYCLE, CalendarSystem, DAYS_IN_MONTH, ETHIOPIAN_LEAP_REMAINDER, ETHIOPIAN_MONTH_DAYS, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, HIJRI_MONTH_DAYS, LEAP_YEAR_CYCLE, MAX_YEAR, MIN_DAY, MIN_MONTH,
    MIN_YEAR, PAGUME, PAGUME_DAYS, PAGUME_DAYS_LEAP,
};

pub const fn month_count(system: CalendarSystem) -> u8 {
    system.month_count()
}

/// Whether `year` is a leap year in `system`.
///
/// The Hijri arithmetic model has no leap years.
pub const fn is_leap_year(system: CalendarSystem, year: i64) -> bool {
    match system {
        CalendarSystem::Gregorian => is_gregorian_leap_year(year),
        CalendarSystem::Ethiopian => year.rem_euclid(LEAP_YEAR_CYCLE) == ETHIOPIAN_LEAP_REMAINDER,
        CalendarSystem::Hijri => false,
    }
}

pub const fn is_gregorian_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || year % GREGORIAN_CYCLE == 0
}

/// Number of days in `month` of `year`, or 0 when the month does not exist in `system`.
pub const fn days_in_month(system: CalendarSystem, year: i64, month: i64) -> u8 {
    if month < MIN_MONTH as i64 || month > system.month_count() as i64 {
        return 0;
    }

    match system {
        CalendarSystem::Gregorian => {
            if month == FEBRUARY as i64 && is_gregorian_leap_year(year) {
                FEBRUARY_DAYS_LEAP
            } else {
                DAYS_IN_MONTH[month as usize]
            }
        },
        CalendarSystem::Ethiopian => {
            if month == PAGUME as i64 {
                if is_leap_year(system, year) { PAGUME_DAYS_LEAP } else { PAGUME_DAYS }
            } else {
                ETHIOPIAN_MONTH_DAYS
            }
        },
        CalendarSystem::Hijri => HIJRI_MONTH_DAYS,
    }
}

pub const fn is_valid_year(year: i64) -> bool {
    year >= MIN_YEAR as i64 && year <= MAX_YEAR as i64
}

pub const fn is_valid_date(system: CalendarSystem, year: i64, month: i64, day: i64) -> bool {
    is_valid_year(year) && day >= MIN_DAY as i64 && day <= days_in_month(system, year, month) as i64
}

/// The (year, month) before the given one, wrapping at the system's month count
pub const fn previous_month(system: CalendarSystem, year: i64, month: i64) -> (i64, i64) {
    if month <= MIN_MONTH as i64 { (year - 1, system.month_count() as i64) } else { (year, month - 1) }
}

/// The (year, month) after the given one, wrapping at the system's month count
pub const fn next_month(system: CalendarSystem, year: i64, month: i64) -> (i64, i64) {
    if month >= system.month_count() as i64 { (year + 1, MIN_MONTH as i64) } else { (year, month + 1) }
}

/// The day before (year, month, day), stepping across month and year boundaries
pub const fn previous_day(system: CalendarSystem, year: i64, month: i64, day: i64) -> (i64, i64, i64) {
    if day > MIN_DAY as i64 {
        (year, month, day - 1)
    } else {
        let (y, m) = previous_month(system, year, month);
        (y, m, days_in_month(system, y, m) as i64)
    }
}

/// The day after (year, month, day), stepping across month and year boundaries
pub const fn next_day(system: CalendarSystem, year: i64, month: i64, day: i64) -> (i64, i64, i64) {
    if day < days_in_month(system, year, month) as i64 {
        (year, month, day + 1)
    } else {
        let (y, m) = next_month(system, year, month);
        (y, m, MIN_DAY as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: CalendarSystem = CalendarSystem::Gregorian;
    const E: CalendarSystem = CalendarSystem::Ethiopian;
    const H: CalendarSystem = CalendarSystem::Hijri;

    #[test]
    fn test_gregorian_leap_year_cases() {
        struct TestCase {
            year:        i64,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(G, case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_gregorian_month_lengths() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(G, 2023, month), 31, "Month {month} should have 31 days");
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(G, 2023, month), 30, "Month {month} should have 30 days");
        }
        assert_eq!(days_in_month(G, 2023, 2), 28);
        assert_eq!(days_in_month(G, 2024, 2), 29);
        assert_eq!(days_in_month(G, 1900, 2), 28);
        assert_eq!(days_in_month(G, 2000, 2), 29);
    }

    #[test]
    fn test_ethiopian_month_lengths() {
        for month in 1..=12 {
            assert_eq!(days_in_month(E, 2016, month), 30);
        }
        assert_eq!(days_in_month(E, 2015, 13), 6, "2015 % 4 == 3");
        assert_eq!(days_in_month(E, 2016, 13), 5);
        assert_eq!(days_in_month(E, 2019, 13), 6);
    }

    #[test]
    fn test_pagume_length_for_every_year() {
        for year in 1..=i64::from(MAX_YEAR) {
            let expected = if year % 4 == 3 { 6 } else { 5 };
            assert_eq!(days_in_month(E, year, 13), expected, "Pagume of {year}");
        }
    }

    #[test]
    fn test_hijri_months_are_thirty_days() {
        for month in 1..=12 {
            assert_eq!(days_in_month(H, 1446, month), 30);
        }
        assert!(!is_leap_year(H, 1446));
    }

    #[test]
    fn test_nonexistent_months_have_no_days() {
        assert_eq!(days_in_month(G, 2024, 13), 0);
        assert_eq!(days_in_month(E, 2016, 14), 0);
        assert_eq!(days_in_month(H, 1446, 0), 0);
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date(G, 2024, 2, 29));
        assert!(!is_valid_date(G, 2023, 2, 29));
        assert!(is_valid_date(E, 2015, 13, 6));
        assert!(!is_valid_date(E, 2016, 13, 6));
        assert!(is_valid_date(H, 1446, 12, 30));
        assert!(!is_valid_date(H, 1446, 12, 31));
        assert!(!is_valid_date(G, 0, 1, 1));
        assert!(!is_valid_date(G, 10_000, 1, 1));
        assert!(is_valid_date(G, 9999, 12, 31));
        assert!(!is_valid_date(E, 2016, 1, 0));
    }

    #[test]
    fn test_month_wraparound() {
        assert_eq!(previous_month(E, 2016, 1), (2015, 13));
        assert_eq!(next_month(E, 2016, 13), (2017, 1));
        assert_eq!(next_month(E, 2016, 12), (2016, 13));
        assert_eq!(previous_month(H, 1446, 1), (1445, 12));
        assert_eq!(next_month(G, 2024, 12), (2025, 1));
    }

    #[test]
    fn test_day_stepping() {
        assert_eq!(next_day(E, 2016, 12, 30), (2016, 13, 1));
        assert_eq!(next_day(E, 2016, 13, 5), (2017, 1, 1));
        assert_eq!(next_day(E, 2015, 13, 5), (2015, 13, 6));
        assert_eq!(previous_day(E, 2017, 1, 1), (2016, 13, 5));
        assert_eq!(previous_day(G, 2024, 3, 1), (2024, 2, 29));
        assert_eq!(next_day(H, 1446, 12, 30), (1447, 1, 1));
    }
}
