//! Six-week month grids for any calendar system.
//!
//! Weeks start on Sunday and are aligned by the Gregorian weekday of the
//! month's first day. Cells outside the month walk the rendered system day by
//! day, so a short previous month such as Pagume spills over correctly.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::{CalendarDate, CalendarError, CalendarSystem, DAYS_PER_WEEK, GRID_CELLS, MIN_DAY, rules};

/// One day slot in a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub day:      u8,
    /// False for spillover days from the neighbouring months
    pub in_month: bool,
    pub is_today: bool,
    /// Gregorian `MMM d` of the cell's date, empty when it has none
    pub label:    String,
}

/// Exactly seven cells, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GridCell>", into = "Vec<GridCell>")]
pub struct GridWeek {
    cells: Vec<GridCell>,
}

impl GridWeek {
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }
}

impl TryFrom<Vec<GridCell>> for GridWeek {
    type Error = String;

    fn try_from(cells: Vec<GridCell>) -> Result<Self, Self::Error> {
        if cells.len() == DAYS_PER_WEEK {
            Ok(Self { cells })
        } else {
            Err(format!("a week has {DAYS_PER_WEEK} cells, got {}", cells.len()))
        }
    }
}

impl From<GridWeek> for Vec<GridCell> {
    fn from(week: GridWeek) -> Self {
        week.cells
    }
}

/// A rendered month: six weeks plus labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub system:             CalendarSystem,
    pub year:               u16,
    pub month:              u8,
    /// e.g. `Taḫśaś 2017`
    pub month_label:        String,
    /// Today in the grid's system, e.g. `ረቡዕ, 16 Taḫśaś 2017`
    pub current_date_label: String,
    pub weeks:              Vec<GridWeek>,
}

impl MonthGrid {
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.weeks.iter().flat_map(GridWeek::cells)
    }

    pub fn days_in_month(&self) -> usize {
        self.cells().filter(|cell| cell.in_month).count()
    }
}

/// Builds [`MonthGrid`]s, marking today from the local clock unless a date is pinned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridBuilder {
    today: Option<NaiveDate>,
}

impl GridBuilder {
    pub const fn new() -> Self {
        Self { today: None }
    }

    /// Uses `today` instead of the local clock.
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Lays out `month` of `year` in `system` as 6 weeks of 7 cells.
    ///
    /// # Errors
    /// Returns an invalid-date error for a month that does not exist, or
    /// `CalendarError::Conversion` if its first day has no Gregorian date.
    pub fn build_month(&self, system: CalendarSystem, year: i64, month: i64) -> Result<MonthGrid, CalendarError> {
        let _span = debug_span!("build_month", %system, year, month).entered();

        let first = CalendarDate::new(system, year, month, i64::from(MIN_DAY))?;
        let anchor = first
            .to_gregorian()
            .map_err(|e| e.in_conversion_of(system, first))?
            .weekday()
            .num_days_from_sunday() as usize;

        let gregorian_today = self.today();
        let today = system.from_gregorian(gregorian_today).ok();
        let is_today = |(y, m, d): (i64, i64, i64)| today.is_some_and(|t| t.parts() == (y, m, d));

        let mut cells = Vec::with_capacity(GRID_CELLS);

        let mut leading = Vec::with_capacity(anchor);
        let mut day = first.parts();
        for _ in 0..anchor {
            let (y, m, d) = day;
            day = rules::previous_day(system, y, m, d);
            leading.push(spillover_cell(system, day));
        }
        cells.extend(leading.into_iter().rev());

        for d in 1..=i64::from(first.days_in_month()) {
            let parts = (year, month, d);
            cells.push(GridCell {
                day:      day_number(d),
                in_month: true,
                is_today: is_today(parts),
                label:    gregorian_label(system, parts),
            });
        }

        let (next_year, next_month) = rules::next_month(system, year, month);
        let mut day = (next_year, next_month, i64::from(MIN_DAY));
        while cells.len() < GRID_CELLS {
            cells.push(spillover_cell(system, day));
            let (y, m, d) = day;
            day = rules::next_day(system, y, m, d);
        }

        let weeks = cells
            .chunks(DAYS_PER_WEEK)
            .map(|week| GridWeek { cells: week.to_vec() })
            .collect();

        Ok(MonthGrid {
            system,
            year: first.year(),
            month: first.month(),
            month_label: format!("{} {}", first.month_name(), first.year()),
            current_date_label: today.map(|t| current_date_label(gregorian_today, &t)).unwrap_or_default(),
            weeks,
        })
    }

    /// The grid for the month before (year, month), wrapping at the system's month count.
    ///
    /// # Errors
    /// See [`Self::build_month`].
    pub fn previous_month(&self, system: CalendarSystem, year: i64, month: i64) -> Result<MonthGrid, CalendarError> {
        let (year, month) = rules::previous_month(system, year, month);
        self.build_month(system, year, month)
    }

    /// The grid for the month after (year, month), wrapping at the system's month count.
    ///
    /// # Errors
    /// See [`Self::build_month`].
    pub fn next_month(&self, system: CalendarSystem, year: i64, month: i64) -> Result<MonthGrid, CalendarError> {
        let (year, month) = rules::next_month(system, year, month);
        self.build_month(system, year, month)
    }
}

fn spillover_cell(system: CalendarSystem, parts: (i64, i64, i64)) -> GridCell {
    GridCell {
        day:      day_number(parts.2),
        in_month: false,
        is_today: false,
        label:    gregorian_label(system, parts),
    }
}

fn day_number(day: i64) -> u8 {
    u8::try_from(day).unwrap_or_default()
}

/// `MMM d` of the Gregorian equivalent, or empty when the day cannot be converted
fn gregorian_label(system: CalendarSystem, (year, month, day): (i64, i64, i64)) -> String {
    CalendarDate::new(system, year, month, day)
        .and_then(|date| date.to_gregorian())
        .map(|date| date.format("%b %-d").to_string())
        .unwrap_or_default()
}

fn current_date_label(gregorian: NaiveDate, today: &CalendarDate) -> String {
    let weekday = today.system().day_names()[gregorian.weekday().num_days_from_sunday() as usize];
    match today.system() {
        CalendarSystem::Gregorian => format!("{weekday}, {} {}", today.month_name(), today.day()),
        CalendarSystem::Ethiopian | CalendarSystem::Hijri => format!("{weekday}, {}", today.formatted()),
    }
}
