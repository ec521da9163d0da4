//! Date conversion between the Gregorian, Ethiopian and Hijri calendars.
//!
//! Dates are exchanged as `YYYY-MM-DD` strings tagged with a
//! [`CalendarSystem`]. Every conversion goes through the proleptic Gregorian
//! calendar; see [`convert`] for the arithmetic of each system.
//!
//! ```
//! use tricalendar::{CalendarSystem, ConversionEngine};
//!
//! let result = ConversionEngine::new().convert(CalendarSystem::Gregorian, "2024-12-25")?;
//! assert_eq!(result.formatted_in(CalendarSystem::Ethiopian), Some("16 Taḫśaś 2017"));
//! # Ok::<(), tricalendar::CalendarError>(())
//! ```

mod bulk;
mod config;
mod consts;
mod date;
mod engine;
mod error;
mod grid;
mod holiday;
mod prelude;
mod range;
mod system;
mod types;

pub mod convert;
pub mod rules;
pub mod validate;

pub use bulk::{BulkConverter, BulkItemResult, BulkOutcome, BulkRequest, BulkSummary, RangeRequest};
pub use config::BulkConfig;
pub use consts::*;
pub use date::CalendarDate;
pub use engine::{AgeResult, ConversionEngine, ConversionResult, age_on};
pub use error::{CalendarError, ErrorKind};
pub use grid::{GridBuilder, GridCell, GridWeek, MonthGrid};
pub use holiday::{HolidayLookup, HolidayRecord, HolidayType, InMemoryHolidays, NoHolidays};
pub use range::DateRange;
pub use system::CalendarSystem;
pub use types::{Day, Month, Year};
