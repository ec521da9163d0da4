use chrono::NaiveDate;

use super::{DateConverter, ce_day, ensure_system, from_ce_day};
use crate::{
    CalendarDate, CalendarError, CalendarSystem, HIJRI_EPOCH_CE, HIJRI_MEAN_MONTH_DAYS, HIJRI_MEAN_YEAR_DAYS,
    HIJRI_MONTH_DAYS, HIJRI_MONTHS_PER_YEAR,
};

/// Arithmetic Hijri converter.
///
/// Uses mean lengths of 354.367 days per year and 29.53 days per month from
/// an epoch of 0622-07-16. This is an approximation, not the Umm al-Qura
/// table: Gregorian → Hijri → Gregorian may drift by one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hijri;

impl DateConverter for Hijri {
    const SYSTEM: CalendarSystem = CalendarSystem::Hijri;

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn to_gregorian(&self, date: &CalendarDate) -> Result<NaiveDate, CalendarError> {
        ensure_system::<Self>(date)?;
        let (year, month, day) = date.parts();
        let elapsed = (year - 1) as f64 * HIJRI_MEAN_YEAR_DAYS + (month - 1) as f64 * HIJRI_MEAN_MONTH_DAYS
            + (day - 1) as f64;
        from_ce_day(HIJRI_EPOCH_CE + elapsed.floor() as i64, Self::SYSTEM, date)
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn from_gregorian(&self, date: NaiveDate) -> Result<CalendarDate, CalendarError> {
        let elapsed = ce_day(date) - HIJRI_EPOCH_CE;
        if elapsed < 0 {
            return Err(CalendarError::conversion(
                CalendarSystem::Gregorian,
                date,
                "before the Hijri epoch (0622-07-16)",
            ));
        }

        let days = elapsed as f64;
        let years = (days / HIJRI_MEAN_YEAR_DAYS).floor();
        let within_year = days - years * HIJRI_MEAN_YEAR_DAYS;
        let months = (within_year / HIJRI_MEAN_MONTH_DAYS).floor();
        let within_month = within_year - months * HIJRI_MEAN_MONTH_DAYS;

        let mut year = years as i64 + 1;
        let mut month = months as i64 + 1;
        let day = (within_month.floor() as i64 + 1).min(i64::from(HIJRI_MONTH_DAYS));

        // The tail of a mean year can spill past the twelfth mean month.
        if month > i64::from(HIJRI_MONTHS_PER_YEAR) {
            month = 1;
            year += 1;
        }

        CalendarDate::new(Self::SYSTEM, year, month, day)
            .map_err(|e| e.in_conversion_of(CalendarSystem::Gregorian, date))
    }
}
