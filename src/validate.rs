//! `YYYY-MM-DD` parsing and validation against a calendar system's rules.
//!
//! Shape problems (wrong arity, non-digits) are `MalformedDate`; well-formed
//! input with an out-of-range component is one of the invalid-date errors.

use crate::{CalendarDate, CalendarError, CalendarSystem, DATE_SEPARATOR};

/// Splits `YYYY-MM-DD` into integer components without range checks.
///
/// # Errors
/// Returns `CalendarError::MalformedDate` unless the input is exactly three
/// dash-separated groups of ASCII digits.
pub fn parse_components(input: &str) -> Result<(i64, i64, i64), CalendarError> {
    let malformed = || CalendarError::MalformedDate {
        input: input.to_owned(),
    };

    let mut parts = input.trim().split(DATE_SEPARATOR).map(|part| parse_number(part).ok_or_else(malformed));
    let year = parts.next().ok_or_else(malformed)??;
    let month = parts.next().ok_or_else(malformed)??;
    let day = parts.next().ok_or_else(malformed)??;
    if parts.next().is_some() {
        return Err(malformed());
    }
    Ok((year, month, day))
}

fn parse_number(part: &str) -> Option<i64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Parses and validates `input` as a date in `system`.
///
/// # Errors
/// Returns `MalformedDate` for a bad shape, otherwise the first out-of-range component.
pub fn parse(input: &str, system: CalendarSystem) -> Result<CalendarDate, CalendarError> {
    let (year, month, day) = parse_components(input)?;
    CalendarDate::new(system, year, month, day)
}

/// # Errors
/// See [`parse`].
pub fn validate(input: &str, system: CalendarSystem) -> Result<(), CalendarError> {
    parse(input, system).map(|_| ())
}

/// Checks already-split components against `system`.
///
/// # Errors
/// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay`.
pub fn validate_components(system: CalendarSystem, year: i64, month: i64, day: i64) -> Result<(), CalendarError> {
    CalendarDate::new(system, year, month, day).map(|_| ())
}

pub fn is_valid(input: &str, system: CalendarSystem) -> bool {
    validate(input, system).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const G: CalendarSystem = CalendarSystem::Gregorian;
    const E: CalendarSystem = CalendarSystem::Ethiopian;
    const H: CalendarSystem = CalendarSystem::Hijri;

    #[test]
    fn test_parse_components() {
        assert_eq!(parse_components("2024-12-25").unwrap(), (2024, 12, 25));
        assert_eq!(parse_components(" 2016-13-06 ").unwrap(), (2016, 13, 6));
        assert_eq!(parse_components("33-1-2").unwrap(), (33, 1, 2));
        assert_eq!(parse_components("0000-00-00").unwrap(), (0, 0, 0));
    }

    #[test]
    fn test_malformed_inputs() {
        let cases = [
            ("", "empty input"),
            ("2024", "year only"),
            ("2024-12", "missing day"),
            ("2024-12-25-01", "too many parts"),
            ("2024/12/25", "wrong separator"),
            ("2024-1a-25", "non-digit month"),
            ("2024--25", "empty month"),
            ("+2024-12-25", "sign prefix"),
            ("-2024-12-25", "negative year"),
            ("2024-12-25T00:00", "time suffix"),
            ("99999999999999999999-01-01", "overflowing year"),
        ];

        for (input, description) in cases {
            let result = parse_components(input);
            assert!(
                matches!(result, Err(CalendarError::MalformedDate { .. })),
                "Expected MalformedDate for {input:?} ({description})"
            );
        }
    }

    #[test]
    fn test_validate_per_system() {
        struct TestCase {
            input:       &'static str,
            system:      CalendarSystem,
            kind:        Option<ErrorKind>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "2024-02-29",
                system:      G,
                kind:        None,
                description: "Gregorian leap day",
            },
            TestCase {
                input:       "2023-02-29",
                system:      G,
                kind:        Some(ErrorKind::InvalidDate),
                description: "Gregorian common-year February 29",
            },
            TestCase {
                input:       "2015-13-06",
                system:      E,
                kind:        None,
                description: "sixth day of a leap Pagume",
            },
            TestCase {
                input:       "2016-13-06",
                system:      E,
                kind:        Some(ErrorKind::InvalidDate),
                description: "sixth day of a common Pagume",
            },
            TestCase {
                input:       "2016-14-01",
                system:      E,
                kind:        Some(ErrorKind::InvalidDate),
                description: "Ethiopian month 14",
            },
            TestCase {
                input:       "1446-12-30",
                system:      H,
                kind:        None,
                description: "thirtieth of a Hijri month",
            },
            TestCase {
                input:       "1446-13-01",
                system:      H,
                kind:        Some(ErrorKind::InvalidDate),
                description: "Hijri month 13",
            },
            TestCase {
                input:       "10000-01-01",
                system:      G,
                kind:        Some(ErrorKind::InvalidDate),
                description: "year past 9999",
            },
            TestCase {
                input:       "12-25-2024",
                system:      G,
                kind:        Some(ErrorKind::InvalidDate),
                description: "month-first order is read as year 12",
            },
            TestCase {
                input:       "2024-12",
                system:      G,
                kind:        Some(ErrorKind::MalformedDate),
                description: "wrong arity",
            },
        ];

        for case in &cases {
            let result = validate(case.input, case.system);
            assert_eq!(
                result.as_ref().err().map(CalendarError::kind),
                case.kind,
                "{} ({})",
                case.input,
                case.description
            );
            assert_eq!(is_valid(case.input, case.system), case.kind.is_none());
        }
    }

    #[test]
    fn test_error_names_offending_value() {
        let err = validate("2016-13-06", E).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Ethiopian day 6 for 2016-13 (must be 1-5)");

        let err = validate("2024/12/25", G).unwrap_err();
        assert!(err.to_string().contains("2024/12/25"));
    }

    #[test]
    fn test_validate_components() {
        assert!(validate_components(E, 2015, 13, 6).is_ok());
        assert!(validate_components(G, 2024, 0, 1).is_err());
        assert!(validate_components(H, 1446, 1, 31).is_err());
    }

    #[test]
    fn test_parse_returns_date() {
        let date = parse("2017-04-16", E).unwrap();
        assert_eq!(date.system(), E);
        assert_eq!(date.parts(), (2017, 4, 16));
    }
}
