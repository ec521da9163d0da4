//! Error types for tricalendar.

use serde::{Deserialize, Serialize};

use crate::{CalendarSystem, MAX_YEAR, prelude::*};

/// Machine-readable tag carried by every [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    #[display(fmt = "MALFORMED_DATE")]
    MalformedDate,
    #[display(fmt = "INVALID_DATE")]
    InvalidDate,
    #[display(fmt = "CONVERSION_ERROR")]
    ConversionError,
    #[display(fmt = "INVALID_RANGE")]
    InvalidRange,
    #[display(fmt = "CALENDAR_NOT_FOUND")]
    CalendarNotFound,
    #[display(fmt = "HOLIDAY_LOOKUP_FAILURE")]
    HolidayLookupFailure,
    #[display(fmt = "INVALID_CONFIG")]
    InvalidConfig,
}

/// Error type for all fallible operations in tricalendar.
///
/// Every error is request-scoped; none of them is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The input does not have the `YYYY-MM-DD` shape.
    #[error("Malformed date '{input}': expected YYYY-MM-DD")]
    MalformedDate { input: String },

    #[error("Invalid {system} year {year} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear { system: CalendarSystem, year: i64 },

    #[error("Invalid {system} month {month} in year {year} (must be 1-{max})")]
    InvalidMonth {
        system: CalendarSystem,
        year:   i64,
        month:  i64,
        max:    u8,
    },

    #[error("Invalid {system} day {day} for {year}-{month:02} (must be 1-{max})")]
    InvalidDay {
        system: CalendarSystem,
        year:   i64,
        month:  i64,
        day:    i64,
        max:    u8,
    },

    /// Arithmetic failed for an otherwise valid source date.
    #[error("Cannot convert {system} date {date}: {reason}")]
    Conversion {
        system: CalendarSystem,
        date:   String,
        reason: String,
    },

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Unknown calendar system '{0}'")]
    CalendarNotFound(String),

    /// Never escapes the conversion engine, which degrades it to an empty list.
    #[error("Holiday lookup failed: {0}")]
    HolidayLookup(String),

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl CalendarError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedDate { .. } => ErrorKind::MalformedDate,
            Self::InvalidYear { .. } | Self::InvalidMonth { .. } | Self::InvalidDay { .. } => {
                ErrorKind::InvalidDate
            },
            Self::Conversion { .. } => ErrorKind::ConversionError,
            Self::InvalidRange(_) => ErrorKind::InvalidRange,
            Self::CalendarNotFound(_) => ErrorKind::CalendarNotFound,
            Self::HolidayLookup(_) => ErrorKind::HolidayLookupFailure,
            Self::InvalidConfig { .. } => ErrorKind::InvalidConfig,
        }
    }

    pub(crate) fn conversion(system: CalendarSystem, date: impl ToString, reason: impl ToString) -> Self {
        Self::Conversion {
            system,
            date: date.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Re-wraps an error raised while computing a target date so the message
    /// names the source date. Errors already carrying conversion context pass through.
    pub(crate) fn in_conversion_of(self, system: CalendarSystem, date: impl ToString) -> Self {
        match self {
            Self::Conversion { .. } => self,
            other => Self::conversion(system, date, other),
        }
    }
}
