use chrono::NaiveDate;

use super::{DateConverter, ce_day, ensure_system, from_ce_day};
use crate::{CalendarDate, CalendarError, CalendarSystem, ETHIOPIAN_EPOCH_CE, ETHIOPIAN_MONTH_DAYS};

/// Days in a full four-year Ethiopian cycle (three common years and one leap year)
const CYCLE_DAYS: i64 = 4 * 365 + 1;

/// Ethiopian calendar converter.
///
/// Meskerem 1 of year `y` falls `365·(y−1) + ⌊y/4⌋` days after the era epoch
/// (0008-08-27 proleptic Gregorian). Between 1900 and 2100 that is Gregorian
/// September 11, or September 12 in the year before a Gregorian leap year.
/// Both directions are exact inverses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ethiopian;

impl Ethiopian {
    /// CE day number of Meskerem 1 of `year`
    pub(crate) const fn new_year_day(year: i64) -> i64 {
        ETHIOPIAN_EPOCH_CE + 365 * (year - 1) + year.div_euclid(4)
    }
}

impl DateConverter for Ethiopian {
    const SYSTEM: CalendarSystem = CalendarSystem::Ethiopian;

    fn to_gregorian(&self, date: &CalendarDate) -> Result<NaiveDate, CalendarError> {
        ensure_system::<Self>(date)?;
        let (year, month, day) = date.parts();
        let offset = (month - 1) * i64::from(ETHIOPIAN_MONTH_DAYS) + (day - 1);
        from_ce_day(Self::new_year_day(year) + offset, Self::SYSTEM, date)
    }

    fn from_gregorian(&self, date: NaiveDate) -> Result<CalendarDate, CalendarError> {
        let day_number = ce_day(date);
        if day_number < ETHIOPIAN_EPOCH_CE {
            return Err(CalendarError::conversion(
                CalendarSystem::Gregorian,
                date,
                "before the Ethiopian era epoch (0008-08-27)",
            ));
        }

        // The cycle estimate is at most one year off in either direction.
        let mut year = (day_number - ETHIOPIAN_EPOCH_CE) * 4 / CYCLE_DAYS + 1;
        while Self::new_year_day(year) > day_number {
            year -= 1;
        }
        while Self::new_year_day(year + 1) <= day_number {
            year += 1;
        }

        let since_new_year = day_number - Self::new_year_day(year);
        let month_days = i64::from(ETHIOPIAN_MONTH_DAYS);
        let month = since_new_year / month_days + 1;
        let day = since_new_year % month_days + 1;

        CalendarDate::new(Self::SYSTEM, year, month, day)
            .map_err(|e| e.in_conversion_of(CalendarSystem::Gregorian, date))
    }
}
