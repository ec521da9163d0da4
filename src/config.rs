//! Limits for bulk and range conversions.

use serde::{Deserialize, Serialize};

use crate::{CalendarError, DEFAULT_MAX_BATCH_SIZE, DEFAULT_MAX_RANGE_DAYS};

/// Size limits applied around [`crate::BulkConverter`].
///
/// The range limit is enforced by the converter itself. The batch limit is
/// for the caller to check with [`BulkConfig::ensure_batch_size`] before
/// handing a batch over; the converter processes any batch it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkConfig {
    max_batch_size: usize,
    max_range_days: u32,
}

impl BulkConfig {
    pub const fn new() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            max_range_days: DEFAULT_MAX_RANGE_DAYS,
        }
    }

    #[must_use]
    pub const fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size;
        self
    }

    /// Sets the largest inclusive day count a range conversion may span.
    #[must_use]
    pub const fn with_max_range_days(mut self, max_range_days: u32) -> Self {
        self.max_range_days = max_range_days;
        self
    }

    pub const fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    pub const fn max_range_days(&self) -> u32 {
        self.max_range_days
    }

    /// # Errors
    /// Returns `CalendarError::InvalidConfig` if either limit is zero.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.max_batch_size == 0 {
            return Err(CalendarError::InvalidConfig {
                reason: "max_batch_size must be at least 1".to_owned(),
            });
        }
        if self.max_range_days == 0 {
            return Err(CalendarError::InvalidConfig {
                reason: "max_range_days must be at least 1".to_owned(),
            });
        }
        Ok(())
    }

    /// Checks a batch of `len` items against the batch limit.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidRange` if `len` exceeds the limit.
    pub fn ensure_batch_size(&self, len: usize) -> Result<(), CalendarError> {
        if len > self.max_batch_size {
            return Err(CalendarError::InvalidRange(format!(
                "batch of {len} items exceeds the limit of {}",
                self.max_batch_size
            )));
        }
        Ok(())
    }
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_defaults() {
        let cfg = BulkConfig::default();
        assert_eq!(cfg.max_batch_size(), 100);
        assert_eq!(cfg.max_range_days(), 1000);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let cfg = BulkConfig::new().with_max_batch_size(10).with_max_range_days(31);
        assert_eq!(cfg.max_batch_size(), 10);
        assert_eq!(cfg.max_range_days(), 31);
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let err = BulkConfig::new().with_max_batch_size(0).validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert!(BulkConfig::new().with_max_range_days(0).validate().is_err());
    }

    #[test]
    fn test_ensure_batch_size() {
        let cfg = BulkConfig::default();
        assert!(cfg.ensure_batch_size(0).is_ok());
        assert!(cfg.ensure_batch_size(100).is_ok());
        let err = cfg.ensure_batch_size(101).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert!(err.to_string().contains("101"));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let cfg: BulkConfig = serde_json::from_str(r#"{"max_range_days": 90}"#).unwrap();
        assert_eq!(cfg.max_batch_size(), 100);
        assert_eq!(cfg.max_range_days(), 90);

        let cfg: BulkConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, BulkConfig::default());
    }
}
