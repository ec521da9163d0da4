//! Single-date conversion into all three calendar systems.

use std::collections::BTreeMap;

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, warn};

use crate::{
    CalendarDate, CalendarError, CalendarSystem,
    convert::{DateConverter, Gregorian},
    holiday::{HolidayLookup, NoHolidays},
    validate,
};

/// A date expressed in every calendar system.
///
/// `targets` and `formatted` always hold an entry for each system, the source
/// system mapping to the source date itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub source:    CalendarDate,
    pub targets:   BTreeMap<CalendarSystem, CalendarDate>,
    pub formatted: BTreeMap<CalendarSystem, String>,
    /// Holiday names per system; empty when the lookup had nothing or failed
    pub holidays:  BTreeMap<CalendarSystem, Vec<String>>,
}

impl ConversionResult {
    pub fn target(&self, system: CalendarSystem) -> Option<&CalendarDate> {
        self.targets.get(&system)
    }

    pub fn formatted_in(&self, system: CalendarSystem) -> Option<&str> {
        self.formatted.get(&system).map(String::as_str)
    }

    pub fn holidays_in(&self, system: CalendarSystem) -> &[String] {
        self.holidays.get(&system).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Completed age for a birth date given in any system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeResult {
    pub years:                u32,
    pub birth_date:           CalendarDate,
    pub gregorian_birth_date: NaiveDate,
    /// Falls on February 28 for a February 29 birth date in a common year
    pub next_birthday:        NaiveDate,
}

/// Converts dates between systems and attaches holiday names.
#[derive(Debug, Clone, Default)]
pub struct ConversionEngine<H = NoHolidays> {
    holidays: H,
}

impl ConversionEngine<NoHolidays> {
    pub const fn new() -> Self {
        Self { holidays: NoHolidays }
    }
}

impl<H: HolidayLookup> ConversionEngine<H> {
    pub const fn with_holidays(holidays: H) -> Self {
        Self { holidays }
    }

    pub const fn holidays(&self) -> &H {
        &self.holidays
    }

    /// Parses `input` as a `system` date and converts it.
    ///
    /// # Errors
    /// `MalformedDate` or an invalid-date error from validation, or
    /// `CalendarError::Conversion` naming the source date when arithmetic fails.
    pub fn convert(&self, system: CalendarSystem, input: &str) -> Result<ConversionResult, CalendarError> {
        let date = validate::parse(input, system)?;
        self.convert_date(&date)
    }

    /// Converts an already validated date.
    ///
    /// # Errors
    /// Returns `CalendarError::Conversion` naming the source date when any
    /// target falls outside its system's supported years.
    pub fn convert_date(&self, source: &CalendarDate) -> Result<ConversionResult, CalendarError> {
        let _span = debug_span!("convert", system = %source.system(), date = %source).entered();

        let anchor = source
            .to_gregorian()
            .map_err(|e| e.in_conversion_of(source.system(), source))?;

        let mut targets = BTreeMap::new();
        for system in CalendarSystem::ALL {
            let target = if system == source.system() {
                *source
            } else {
                system
                    .from_gregorian(anchor)
                    .map_err(|e| e.in_conversion_of(source.system(), source))?
            };
            targets.insert(system, target);
        }

        let formatted = targets.iter().map(|(system, date)| (*system, date.formatted())).collect();
        let holidays = targets.iter().map(|(system, date)| (*system, self.holidays_on(date))).collect();
        debug!(gregorian = %anchor, "converted");

        Ok(ConversionResult {
            source: *source,
            targets,
            formatted,
            holidays,
        })
    }

    fn holidays_on(&self, date: &CalendarDate) -> Vec<String> {
        match self.holidays.holidays_on_date(date.system(), &date.to_string()) {
            Ok(names) => names,
            Err(error) => {
                warn!(system = %date.system(), %date, %error, "holiday lookup failed, continuing without holidays");
                Vec::new()
            },
        }
    }

    /// Today's local date in every system.
    ///
    /// # Errors
    /// See [`Self::today_on`].
    pub fn today(&self) -> Result<ConversionResult, CalendarError> {
        self.today_on(Local::now().date_naive())
    }

    /// # Errors
    /// Returns `CalendarError::Conversion` if `today` is outside the supported years.
    pub fn today_on(&self, today: NaiveDate) -> Result<ConversionResult, CalendarError> {
        self.convert_date(&Gregorian.from_gregorian(today)?)
    }

    /// Completed years since `birth_input` (a `system` date) as of the local date.
    ///
    /// # Errors
    /// See [`Self::age_on`].
    pub fn age(&self, system: CalendarSystem, birth_input: &str) -> Result<AgeResult, CalendarError> {
        age_on(system, birth_input, Local::now().date_naive())
    }

    /// # Errors
    /// See [`age_on`].
    pub fn age_on(&self, system: CalendarSystem, birth_input: &str, today: NaiveDate) -> Result<AgeResult, CalendarError> {
        age_on(system, birth_input, today)
    }
}

/// Completed years between a `system` birth date and `today`.
///
/// # Errors
/// Validation errors for `birth_input`, `CalendarError::InvalidRange` if the
/// birth date is after `today`, or `CalendarError::Conversion` if the next
/// birthday leaves the supported years.
pub fn age_on(system: CalendarSystem, birth_input: &str, today: NaiveDate) -> Result<AgeResult, CalendarError> {
    let birth_date = validate::parse(birth_input, system)?;
    let born = birth_date.to_gregorian()?;
    if born > today {
        return Err(CalendarError::InvalidRange(format!(
            "birth date {birth_date} ({born}) is after {today}"
        )));
    }

    let had_birthday = (today.month(), today.day()) >= (born.month(), born.day());
    let years = today.year() - born.year() - i32::from(!had_birthday);
    let years = u32::try_from(years).unwrap_or_default();

    let next_birthday = years
        .checked_add(1)
        .and_then(|next| next.checked_mul(12))
        .and_then(|months| born.checked_add_months(Months::new(months)))
        .ok_or_else(|| CalendarError::conversion(system, birth_date, "next birthday is out of range"))?;

    Ok(AgeResult {
        years,
        birth_date,
        gregorian_birth_date: born,
        next_birthday,
    })
}
