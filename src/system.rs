use std::str::FromStr;

use chrono::NaiveDate;

use crate::{
    CalendarDate, CalendarError, ETHIOPIAN_DAY_NAMES, ETHIOPIAN_MONTH_NAMES, ETHIOPIAN_MONTHS_PER_YEAR,
    GREGORIAN_DAY_NAMES, GREGORIAN_MONTH_NAMES, GREGORIAN_MONTHS_PER_YEAR, HIJRI_DAY_NAMES, HIJRI_MONTH_NAMES,
    HIJRI_MONTHS_PER_YEAR,
    convert::{DateConverter, Ethiopian, Gregorian, Hijri},
    prelude::*,
};

/// The calendar systems the crate converts between.
///
/// A pure tag: rules and converters are selected by matching on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum CalendarSystem {
    #[display(fmt = "Gregorian")]
    Gregorian,
    #[display(fmt = "Ethiopian")]
    Ethiopian,
    #[display(fmt = "Hijri")]
    Hijri,
}

impl CalendarSystem {
    pub const ALL: [Self; 3] = [Self::Gregorian, Self::Ethiopian, Self::Hijri];

    /// Canonical lowercase code, the first entry of [`Self::aliases`]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::Ethiopian => "ethiopian",
            Self::Hijri => "hijri",
        }
    }

    /// Names accepted (case-insensitively) when parsing
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Gregorian => &["gregorian", "greg", "g"],
            Self::Ethiopian => &["ethiopian", "eth", "e"],
            Self::Hijri => &["hijri", "hij", "h", "islamic"],
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Gregorian => "Gregorian",
            Self::Ethiopian => "Ethiopian",
            Self::Hijri => "Hijri",
        }
    }

    pub const fn month_count(self) -> u8 {
        match self {
            Self::Gregorian => GREGORIAN_MONTHS_PER_YEAR,
            Self::Ethiopian => ETHIOPIAN_MONTHS_PER_YEAR,
            Self::Hijri => HIJRI_MONTHS_PER_YEAR,
        }
    }

    pub const fn month_names(self) -> &'static [&'static str] {
        match self {
            Self::Gregorian => &GREGORIAN_MONTH_NAMES,
            Self::Ethiopian => &ETHIOPIAN_MONTH_NAMES,
            Self::Hijri => &HIJRI_MONTH_NAMES,
        }
    }

    /// Day names, Sunday first
    pub const fn day_names(self) -> &'static [&'static str; 7] {
        match self {
            Self::Gregorian => &GREGORIAN_DAY_NAMES,
            Self::Ethiopian => &ETHIOPIAN_DAY_NAMES,
            Self::Hijri => &HIJRI_DAY_NAMES,
        }
    }

    /// Returns the name of a 1-indexed month, or `None` past the month count
    pub fn month_name(self, month: u8) -> Option<&'static str> {
        let index = usize::from(month).checked_sub(1)?;
        self.month_names().get(index).copied()
    }

    /// Maps a date in this system onto the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::Conversion` if the date belongs to another system
    /// or the result falls outside the supported Gregorian years.
    pub fn to_gregorian(self, date: &CalendarDate) -> Result<NaiveDate, CalendarError> {
        match self {
            Self::Gregorian => Gregorian.to_gregorian(date),
            Self::Ethiopian => Ethiopian.to_gregorian(date),
            Self::Hijri => Hijri.to_gregorian(date),
        }
    }

    /// Maps a Gregorian day into this system.
    ///
    /// # Errors
    /// Returns `CalendarError::Conversion` if the day has no representation
    /// within years 1-9999 of this system.
    pub fn from_gregorian(self, date: NaiveDate) -> Result<CalendarDate, CalendarError> {
        match self {
            Self::Gregorian => Gregorian.from_gregorian(date),
            Self::Ethiopian => Ethiopian.from_gregorian(date),
            Self::Hijri => Hijri.from_gregorian(date),
        }
    }
}

impl FromStr for CalendarSystem {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|system| system.aliases().iter().any(|alias| alias.eq_ignore_ascii_case(wanted)))
            .ok_or_else(|| CalendarError::CalendarNotFound(s.to_owned()))
    }
}

impl TryFrom<&str> for CalendarSystem {
    type Error = CalendarError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl serde::Serialize for CalendarSystem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarSystem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
