//! Holiday lookup contract and an in-memory store.
//!
//! Lookups are keyed by calendar system and in-system (month, day). A record
//! without a specific year recurs every year.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{CalendarError, CalendarSystem, prelude::*, validate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HolidayType {
    #[display(fmt = "NATIONAL")]
    National,
    #[display(fmt = "RELIGIOUS")]
    Religious,
    #[display(fmt = "INTERNATIONAL")]
    International,
}

impl FromStr for HolidayType {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NATIONAL" => Ok(Self::National),
            "RELIGIOUS" => Ok(Self::Religious),
            "INTERNATIONAL" => Ok(Self::International),
            _ => Err(CalendarError::HolidayLookup(format!("unknown holiday type '{s}'"))),
        }
    }
}

/// A named day in one calendar system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    pub name:          String,
    pub description:   Option<String>,
    pub system:        CalendarSystem,
    pub holiday_type:  HolidayType,
    pub month:         u8,
    pub day:           u8,
    /// `None` for holidays that recur every year
    pub specific_year: Option<u16>,
    pub country_code:  Option<String>,
}

impl HolidayRecord {
    pub fn recurring(
        name: impl Into<String>,
        description: impl Into<String>,
        system: CalendarSystem,
        holiday_type: HolidayType,
        month: u8,
        day: u8,
    ) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            system,
            holiday_type,
            month,
            day,
            specific_year: None,
            country_code: None,
        }
    }

    /// Restricts the record to a single year.
    #[must_use]
    pub const fn in_year(mut self, year: u16) -> Self {
        self.specific_year = Some(year);
        self
    }

    #[must_use]
    pub fn with_country(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    pub const fn is_recurring(&self) -> bool {
        self.specific_year.is_none()
    }

    /// Whether the record applies to `year` of its own system
    pub fn applies_to_year(&self, year: u16) -> bool {
        self.specific_year.is_none_or(|specific| specific == year)
    }
}

/// Queries the conversion engine makes about holidays.
///
/// Implementations may be backed by storage that can fail; callers decide how
/// to degrade.
pub trait HolidayLookup {
    /// Names of holidays falling on `date` (`YYYY-MM-DD` in `system`).
    ///
    /// # Errors
    /// Returns `CalendarError::HolidayLookup` if the store cannot answer.
    fn holidays_on_date(&self, system: CalendarSystem, date: &str) -> Result<Vec<String>, CalendarError>;

    /// Holidays in `month` of `year`, recurring ones included.
    ///
    /// # Errors
    /// Returns `CalendarError::HolidayLookup` if the store cannot answer.
    fn holidays_in_month(&self, system: CalendarSystem, year: u16, month: u8)
    -> Result<Vec<HolidayRecord>, CalendarError>;

    /// Holidays on or after (month, day) in the year, ordered by (month, day).
    ///
    /// # Errors
    /// Returns `CalendarError::HolidayLookup` if the store cannot answer.
    fn holidays_from_onward(&self, system: CalendarSystem, month: u8, day: u8)
    -> Result<Vec<HolidayRecord>, CalendarError>;

    /// Holidays of a type given by tag (`national`, `religious`, `international`).
    ///
    /// # Errors
    /// Returns `CalendarError::HolidayLookup` if the store cannot answer.
    fn holidays_by_type(&self, system: CalendarSystem, type_tag: &str) -> Result<Vec<HolidayRecord>, CalendarError>;
}

/// A lookup that knows no holidays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHolidays;

impl HolidayLookup for NoHolidays {
    fn holidays_on_date(&self, _: CalendarSystem, _: &str) -> Result<Vec<String>, CalendarError> {
        Ok(Vec::new())
    }

    fn holidays_in_month(&self, _: CalendarSystem, _: u16, _: u8) -> Result<Vec<HolidayRecord>, CalendarError> {
        Ok(Vec::new())
    }

    fn holidays_from_onward(&self, _: CalendarSystem, _: u8, _: u8) -> Result<Vec<HolidayRecord>, CalendarError> {
        Ok(Vec::new())
    }

    fn holidays_by_type(&self, _: CalendarSystem, _: &str) -> Result<Vec<HolidayRecord>, CalendarError> {
        Ok(Vec::new())
    }
}

/// Holiday records held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryHolidays {
    records: Vec<HolidayRecord>,
}

impl InMemoryHolidays {
    pub const fn new(records: Vec<HolidayRecord>) -> Self {
        Self { records }
    }

    /// A store seeded with common Ethiopian, Islamic and Gregorian holidays.
    pub fn with_defaults() -> Self {
        use CalendarSystem::{Ethiopian, Gregorian, Hijri};
        use HolidayType::{International, National, Religious};

        Self::new(vec![
            HolidayRecord::recurring("Enkutatash", "Ethiopian New Year", Ethiopian, National, 1, 1).with_country("ET"),
            HolidayRecord::recurring("Meskel", "Finding of the True Cross", Ethiopian, Religious, 1, 17)
                .with_country("ET"),
            HolidayRecord::recurring("Christmas", "Ethiopian Christmas - Genna", Ethiopian, Religious, 4, 29)
                .with_country("ET"),
            HolidayRecord::recurring("Timkat", "Epiphany", Ethiopian, Religious, 5, 11).with_country("ET"),
            HolidayRecord::recurring("Adwa Victory", "Victory of Adwa", Ethiopian, National, 6, 23).with_country("ET"),
            HolidayRecord::recurring("Ramadan", "Month of Fasting", Hijri, Religious, 9, 1),
            HolidayRecord::recurring("Eid al-Fitr", "End of Ramadan", Hijri, Religious, 10, 1),
            HolidayRecord::recurring("Eid al-Adha", "Feast of Sacrifice", Hijri, Religious, 12, 10),
            HolidayRecord::recurring("Islamic New Year", "Hijri New Year", Hijri, Religious, 1, 1),
            HolidayRecord::recurring("Mawlid", "Prophet's Birthday", Hijri, Religious, 3, 12),
            HolidayRecord::recurring("New Year's Day", "International New Year", Gregorian, International, 1, 1),
            HolidayRecord::recurring("Christmas", "Christmas Day", Gregorian, Religious, 12, 25),
        ])
    }

    pub fn insert(&mut self, record: HolidayRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[HolidayRecord] {
        &self.records
    }

    fn in_system(&self, system: CalendarSystem) -> impl Iterator<Item = &HolidayRecord> {
        self.records.iter().filter(move |record| record.system == system)
    }
}

impl HolidayLookup for InMemoryHolidays {
    fn holidays_on_date(&self, system: CalendarSystem, date: &str) -> Result<Vec<String>, CalendarError> {
        let date = validate::parse(date, system).map_err(|e| CalendarError::HolidayLookup(e.to_string()))?;
        Ok(self
            .in_system(system)
            .filter(|r| r.month == date.month() && r.day == date.day() && r.applies_to_year(date.year()))
            .map(|r| r.name.clone())
            .collect())
    }

    fn holidays_in_month(
        &self,
        system: CalendarSystem,
        year: u16,
        month: u8,
    ) -> Result<Vec<HolidayRecord>, CalendarError> {
        Ok(self
            .in_system(system)
            .filter(|r| r.month == month && r.applies_to_year(year))
            .cloned()
            .collect())
    }

    fn holidays_from_onward(
        &self,
        system: CalendarSystem,
        month: u8,
        day: u8,
    ) -> Result<Vec<HolidayRecord>, CalendarError> {
        let mut upcoming: Vec<HolidayRecord> =
            self.in_system(system).filter(|r| (r.month, r.day) >= (month, day)).cloned().collect();
        upcoming.sort_by_key(|r| (r.month, r.day));
        Ok(upcoming)
    }

    fn holidays_by_type(&self, system: CalendarSystem, type_tag: &str) -> Result<Vec<HolidayRecord>, CalendarError> {
        let Ok(holiday_type) = type_tag.parse::<HolidayType>() else {
            warn!(type_tag, "unknown holiday type");
            return Ok(Vec::new());
        };
        Ok(self.in_system(system).filter(|r| r.holiday_type == holiday_type).cloned().collect())
    }
}
