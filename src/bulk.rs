//! Batch and range conversions with per-item failure isolation.
//!
//! A failing item is recorded in its [`BulkItemResult`] and never affects the
//! other items. Only a bad range request itself fails the whole call.

use std::time::Instant;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::{debug_span, info, warn};

use crate::{
    BulkConfig, CalendarDate, CalendarError, CalendarSystem, ConversionEngine, DateRange, ErrorKind,
    holiday::{HolidayLookup, NoHolidays},
    validate,
};

/// One entry of an explicit batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkRequest {
    /// `YYYY-MM-DD` in `source`
    pub date:   String,
    pub source: CalendarSystem,
    pub target: CalendarSystem,
}

impl BulkRequest {
    pub fn new(date: impl Into<String>, source: CalendarSystem, target: CalendarSystem) -> Self {
        Self {
            date: date.into(),
            source,
            target,
        }
    }
}

/// Every `step_days`-th day from `start` to `end` (inclusive, in `source`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRequest {
    pub start:            String,
    pub end:              String,
    pub source:           CalendarSystem,
    pub target:           CalendarSystem,
    #[serde(default = "default_step_days")]
    pub step_days:        u32,
    /// When false, dates falling on a Gregorian Saturday or Sunday are left out entirely
    #[serde(default = "default_include_weekends")]
    pub include_weekends: bool,
}

const fn default_step_days() -> u32 {
    1
}

const fn default_include_weekends() -> bool {
    true
}

impl RangeRequest {
    pub fn new(start: impl Into<String>, end: impl Into<String>, source: CalendarSystem, target: CalendarSystem) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            source,
            target,
            step_days: default_step_days(),
            include_weekends: default_include_weekends(),
        }
    }

    #[must_use]
    pub const fn with_step_days(mut self, step_days: u32) -> Self {
        self.step_days = step_days;
        self
    }

    #[must_use]
    pub const fn with_weekends(mut self, include_weekends: bool) -> Self {
        self.include_weekends = include_weekends;
        self
    }
}

/// Outcome of converting one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkItemResult {
    pub source_date:      String,
    pub source_system:    CalendarSystem,
    pub target_date:      Option<CalendarDate>,
    pub target_system:    CalendarSystem,
    pub formatted_target: Option<String>,
    pub succeeded:        bool,
    pub error_message:    Option<String>,
    pub error_kind:       Option<ErrorKind>,
}

impl BulkItemResult {
    fn success(source_date: String, source: CalendarSystem, target: CalendarDate) -> Self {
        Self {
            source_date,
            source_system: source,
            target_date: Some(target),
            target_system: target.system(),
            formatted_target: Some(target.formatted()),
            succeeded: true,
            error_message: None,
            error_kind: None,
        }
    }

    fn failure(source_date: String, source: CalendarSystem, target: CalendarSystem, error: &CalendarError) -> Self {
        Self {
            source_date,
            source_system: source,
            target_date: None,
            target_system: target,
            formatted_target: None,
            succeeded: false,
            error_message: Some(error.to_string()),
            error_kind: Some(error.kind()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BulkSummary {
    pub total:          usize,
    pub succeeded:      usize,
    pub failed:         usize,
    pub elapsed_millis: u64,
}

impl BulkSummary {
    fn tally(results: &[BulkItemResult], started: Instant) -> Self {
        let succeeded = results.iter().filter(|r| r.succeeded).count();
        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            elapsed_millis: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Summary line for an explicit batch.
    pub fn message(&self) -> String {
        if self.total == 0 {
            "No conversion requests provided".to_owned()
        } else if self.failed == 0 {
            format!(
                "All {} conversions completed successfully in {} ms",
                self.total, self.elapsed_millis
            )
        } else {
            format!(
                "Completed {}/{} conversions ({} failed) in {} ms",
                self.succeeded, self.total, self.failed, self.elapsed_millis
            )
        }
    }

    /// Summary line for a range conversion between `start` and `end`.
    pub fn range_message(&self, start: &str, end: &str) -> String {
        format!(
            "Converted {} dates from {start} to {end}. {} successful, {} failed in {} ms",
            self.total, self.succeeded, self.failed, self.elapsed_millis
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOutcome {
    pub results: Vec<BulkItemResult>,
    pub summary: BulkSummary,
    /// [`BulkSummary::message`] for batches, [`BulkSummary::range_message`] for ranges
    pub message: String,
}

/// Runs many single conversions through a [`ConversionEngine`].
#[derive(Debug, Clone, Default)]
pub struct BulkConverter<H = NoHolidays> {
    engine: ConversionEngine<H>,
    config: BulkConfig,
}

impl BulkConverter<NoHolidays> {
    pub const fn new() -> Self {
        Self {
            engine: ConversionEngine::new(),
            config: BulkConfig::new(),
        }
    }
}

impl<H: HolidayLookup> BulkConverter<H> {
    pub const fn with_engine(engine: ConversionEngine<H>) -> Self {
        Self {
            engine,
            config: BulkConfig::new(),
        }
    }

    /// # Errors
    /// Returns `CalendarError::InvalidConfig` if `config` fails [`BulkConfig::validate`].
    pub fn with_config(mut self, config: BulkConfig) -> Result<Self, CalendarError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub const fn config(&self) -> &BulkConfig {
        &self.config
    }

    /// Converts each request independently, in order.
    ///
    /// Batch size is not checked here; see [`BulkConfig::ensure_batch_size`].
    pub fn convert_batch(&self, requests: &[BulkRequest]) -> BulkOutcome {
        let _span = debug_span!("convert_batch", items = requests.len()).entered();
        let started = Instant::now();

        let results: Vec<BulkItemResult> = requests
            .iter()
            .map(|request| {
                let parsed = validate::parse(&request.date, request.source);
                self.convert_item(request.date.clone(), request.source, request.target, parsed)
            })
            .collect();

        finish(results, started, BulkSummary::message)
    }

    /// Converts every `step_days`-th day of a source-system range.
    ///
    /// # Errors
    /// Fails as a whole, before converting anything, when either bound does
    /// not parse, `step_days` is 0, end < start, or the range spans more
    /// inclusive days than the configured limit.
    pub fn convert_range(&self, request: &RangeRequest) -> Result<BulkOutcome, CalendarError> {
        let _span = debug_span!(
            "convert_range",
            start = %request.start,
            end = %request.end,
            source = %request.source,
            target = %request.target
        )
        .entered();
        let started = Instant::now();

        let start = validate::parse(&request.start, request.source)?;
        let end = validate::parse(&request.end, request.source)?;
        if request.step_days == 0 {
            return Err(CalendarError::InvalidRange("step_days must be at least 1".to_owned()));
        }
        let range = DateRange::new(start, end)?;
        let limit = self.config.max_range_days();
        if range.day_count() > u64::from(limit) {
            return Err(CalendarError::InvalidRange(format!(
                "{range} spans {} days, more than the limit of {limit}",
                range.day_count()
            )));
        }

        let step = usize::try_from(request.step_days).unwrap_or(usize::MAX);
        let results = range
            .days()
            .step_by(step)
            .filter(|day| request.include_weekends || !is_weekend(day))
            .map(|day| self.convert_item(day.to_string(), request.source, request.target, Ok(day)))
            .collect();

        Ok(finish(results, started, |summary| {
            summary.range_message(&request.start, &request.end)
        }))
    }

    fn convert_item(
        &self,
        source_date: String,
        source: CalendarSystem,
        target: CalendarSystem,
        parsed: Result<CalendarDate, CalendarError>,
    ) -> BulkItemResult {
        let converted = parsed
            .and_then(|date| self.engine.convert_date(&date))
            .and_then(|mut result| {
                result
                    .targets
                    .remove(&target)
                    .ok_or_else(|| CalendarError::conversion(source, &source_date, format!("no {target} target")))
            });

        match converted {
            Ok(date) => BulkItemResult::success(source_date, source, date),
            Err(error) => {
                warn!(date = %source_date, %source, %target, %error, "conversion failed");
                BulkItemResult::failure(source_date, source, target, &error)
            },
        }
    }
}

/// A day whose weekday cannot be determined is kept and fails on conversion instead.
fn is_weekend(day: &CalendarDate) -> bool {
    matches!(day.weekday(), Ok(Weekday::Sat | Weekday::Sun))
}

fn finish(results: Vec<BulkItemResult>, started: Instant, message: impl FnOnce(&BulkSummary) -> String) -> BulkOutcome {
    let summary = BulkSummary::tally(&results, started);
    let message = message(&summary);
    info!(
        total = summary.total,
        succeeded = summary.succeeded,
        failed = summary.failed,
        elapsed_ms = summary.elapsed_millis,
        "{message}"
    );
    BulkOutcome {
        results,
        summary,
        message,
    }
}
