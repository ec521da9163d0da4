//! Conversions between each calendar system and the Gregorian calendar.
//!
//! Every system converts through Gregorian: `from_gregorian` maps a
//! [`NaiveDate`] into the system and `to_gregorian` maps back. Day counts are
//! chrono's CE day numbers (0001-01-01 is day 1).

mod ethiopian;
mod hijri;

use chrono::{Datelike, NaiveDate};

pub use self::{ethiopian::Ethiopian, hijri::Hijri};
use crate::{CalendarDate, CalendarError, CalendarSystem, MAX_YEAR, MIN_YEAR};

/// One calendar system's mapping onto the Gregorian calendar.
pub trait DateConverter {
    /// The system this converter reads and produces.
    const SYSTEM: CalendarSystem;

    /// # Errors
    /// Returns `CalendarError::Conversion` if `date` belongs to another system
    /// or lands outside Gregorian years 1-9999.
    fn to_gregorian(&self, date: &CalendarDate) -> Result<NaiveDate, CalendarError>;

    /// # Errors
    /// Returns `CalendarError::Conversion` if `date` has no representation in
    /// years 1-9999 of this system.
    fn from_gregorian(&self, date: NaiveDate) -> Result<CalendarDate, CalendarError>;
}

/// The identity converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gregorian;

impl DateConverter for Gregorian {
    const SYSTEM: CalendarSystem = CalendarSystem::Gregorian;

    fn to_gregorian(&self, date: &CalendarDate) -> Result<NaiveDate, CalendarError> {
        ensure_system::<Self>(date)?;
        let (year, month, day) = date.parts();
        let naive = i32::try_from(year)
            .ok()
            .zip(u32::try_from(month).ok())
            .zip(u32::try_from(day).ok())
            .and_then(|((y, m), d)| NaiveDate::from_ymd_opt(y, m, d));
        naive.ok_or_else(|| CalendarError::conversion(Self::SYSTEM, date, "no such proleptic Gregorian day"))
    }

    fn from_gregorian(&self, date: NaiveDate) -> Result<CalendarDate, CalendarError> {
        CalendarDate::from_gregorian_date(date).map_err(|e| e.in_conversion_of(Self::SYSTEM, date))
    }
}

pub(crate) fn ensure_system<C: DateConverter>(date: &CalendarDate) -> Result<(), CalendarError> {
    if date.system() == C::SYSTEM {
        Ok(())
    } else {
        Err(CalendarError::conversion(
            date.system(),
            date,
            format!("expected a {} date", C::SYSTEM),
        ))
    }
}

/// CE day number of a Gregorian date
pub(crate) fn ce_day(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

/// Gregorian date for a CE day number, restricted to years 1-9999.
/// `source` names the date being converted for error context.
pub(crate) fn from_ce_day(day: i64, system: CalendarSystem, source: &CalendarDate) -> Result<NaiveDate, CalendarError> {
    let out_of_range = || CalendarError::conversion(system, source, "result is outside Gregorian years 1-9999");
    let date = i32::try_from(day)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or_else(out_of_range)?;
    if date.year() < i32::from(MIN_YEAR) || date.year() > i32::from(MAX_YEAR) {
        return Err(out_of_range());
    }
    Ok(date)
}

/// Converts a Gregorian (y, m, d) into the Ethiopian calendar.
///
/// # Errors
/// Returns an invalid-date error for a bad Gregorian date, or
/// `CalendarError::Conversion` when the result has no Ethiopian year 1-9999.
pub fn gregorian_to_ethiopian(year: i64, month: i64, day: i64) -> Result<CalendarDate, CalendarError> {
    let source = CalendarDate::new(CalendarSystem::Gregorian, year, month, day)?;
    Ethiopian.from_gregorian(Gregorian.to_gregorian(&source)?)
}

/// Converts an Ethiopian (y, m, d) into the Gregorian calendar.
///
/// # Errors
/// Returns an invalid-date error for a bad Ethiopian date, or
/// `CalendarError::Conversion` when the result leaves Gregorian years 1-9999.
pub fn ethiopian_to_gregorian(year: i64, month: i64, day: i64) -> Result<CalendarDate, CalendarError> {
    let source = CalendarDate::new(CalendarSystem::Ethiopian, year, month, day)?;
    Gregorian.from_gregorian(Ethiopian.to_gregorian(&source)?)
}

/// Converts a Gregorian (y, m, d) into the arithmetic Hijri calendar.
///
/// # Errors
/// Returns an invalid-date error for a bad Gregorian date, or
/// `CalendarError::Conversion` for days before the Hijri epoch.
pub fn gregorian_to_hijri(year: i64, month: i64, day: i64) -> Result<CalendarDate, CalendarError> {
    let source = CalendarDate::new(CalendarSystem::Gregorian, year, month, day)?;
    Hijri.from_gregorian(Gregorian.to_gregorian(&source)?)
}

/// Converts a Hijri (y, m, d) into the Gregorian calendar.
///
/// # Errors
/// Returns an invalid-date error for a bad Hijri date, or
/// `CalendarError::Conversion` when the result leaves Gregorian years 1-9999.
pub fn hijri_to_gregorian(year: i64, month: i64, day: i64) -> Result<CalendarDate, CalendarError> {
    let source = CalendarDate::new(CalendarSystem::Hijri, year, month, day)?;
    Gregorian.from_gregorian(Hijri.to_gregorian(&source)?)
}
