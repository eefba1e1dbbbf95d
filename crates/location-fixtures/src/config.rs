//! Configuration for fixture generation.

use serde::{Deserialize, Serialize};

use crate::writer::GenerateError;

/// Configuration for one generation run.
///
/// The defaults reproduce the historical fixture byte-for-byte: one million
/// records spaced one minute apart starting at epoch 1379129160146 ms, so
/// existing fixture-consuming tests keep working without flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of records to emit. Must be at least 1.
    pub record_count: u64,

    /// Nominal spacing between consecutive records, in seconds.
    pub interval_seconds: i64,

    /// Timestamp of record 0, in milliseconds since the Unix epoch.
    pub start_timestamp_ms: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            record_count: 1_000_000,
            interval_seconds: 60,
            start_timestamp_ms: 1_379_129_160_146,
        }
    }
}

impl GeneratorConfig {
    /// Checks the configuration before any output is written.
    ///
    /// A count of zero is rejected here rather than emitting an empty
    /// `locations` array: the document framing assumes at least one element,
    /// and an empty fixture is never what a test wants.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.record_count == 0 {
            return Err(GenerateError::InvalidRecordCount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_historical_fixture() {
        let config = GeneratorConfig::default();
        assert_eq!(config.record_count, 1_000_000);
        assert_eq!(config.interval_seconds, 60);
        assert_eq!(config.start_timestamp_ms, 1_379_129_160_146);
    }

    #[test]
    fn test_zero_records_rejected() {
        let config = GeneratorConfig {
            record_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenerateError::InvalidRecordCount)
        ));
    }

    #[test]
    fn test_single_record_accepted() {
        let config = GeneratorConfig {
            record_count: 1,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
