//! Record shapes and the shape rotation.
//!
//! Real exports mix bare fixes, fixes with altitude, and fixes with an
//! activity classification attached. The generator cycles through a fixed
//! six-slot rotation so plain and altitude records dominate while activity
//! records stay rare, matching the proportions seen in real history files.

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::rules;

/// The three field-sets a record may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    /// Timestamp, coordinates, and accuracy only.
    Plain,
    /// Adds altitude and vertical accuracy.
    Altitude,
    /// Adds a nested activity classification sample.
    Activity,
}

/// Fixed rotation determining the shape of record `i` as
/// `SHAPE_ROTATION[i % 6]`.
pub const SHAPE_ROTATION: [RecordShape; 6] = [
    RecordShape::Plain,
    RecordShape::Plain,
    RecordShape::Altitude,
    RecordShape::Plain,
    RecordShape::Altitude,
    RecordShape::Activity,
];

/// The fixed classification list carried by every activity record, as
/// (type label, confidence) pairs. These are constants of the fixture, not
/// derived values.
pub const ACTIVITY_CLASSIFICATIONS: [(&str, u32); 4] = [
    ("UNKNOWN", 56),
    ("STILL", 38),
    ("IN_VEHICLE", 5),
    ("TILTING", 1),
];

impl RecordShape {
    /// Returns the shape used for the record at `index`.
    pub fn for_index(index: u64) -> Self {
        SHAPE_ROTATION[(index % SHAPE_ROTATION.len() as u64) as usize]
    }
}

/// One activity type guess with its confidence percentage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub confidence: u32,
}

/// One activity classification sample nested inside a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySample {
    /// Milliseconds since the epoch, string-encoded per the target format.
    pub timestamp_ms: String,
    pub activity: Vec<ActivityEntry>,
}

/// One synthetic location fix, shaped per the rotation.
///
/// Field order matters for byte-for-byte fixture stability: serde emits
/// fields in declaration order, which mirrors the target format's layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    /// Milliseconds since the epoch, string-encoded per the target format.
    pub timestamp_ms: String,
    pub latitude_e7: i64,
    pub longitude_e7: i64,
    pub accuracy: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_accuracy: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<Vec<ActivitySample>>,
}

impl LocationRecord {
    /// Builds the record for `index`. Pure: the same index and configuration
    /// always produce the same record.
    pub fn at_index(index: u64, config: &GeneratorConfig) -> Self {
        let timestamp = rules::timestamp_ms(
            index,
            config.interval_seconds,
            config.start_timestamp_ms,
        );

        let mut record = Self {
            timestamp_ms: timestamp.to_string(),
            latitude_e7: rules::latitude_e7(index),
            longitude_e7: rules::longitude_e7(index),
            accuracy: rules::accuracy(index),
            altitude: None,
            vertical_accuracy: None,
            activity: None,
        };

        match RecordShape::for_index(index) {
            RecordShape::Plain => {}
            RecordShape::Altitude => {
                record.altitude = Some(rules::altitude(index));
                record.vertical_accuracy = Some(rules::vertical_accuracy(index));
            }
            RecordShape::Activity => {
                let sample_ts =
                    timestamp + rules::activity_time_offset(index, config.interval_seconds);
                record.activity = Some(vec![ActivitySample {
                    timestamp_ms: sample_ts.to_string(),
                    activity: ACTIVITY_CLASSIFICATIONS
                        .iter()
                        .map(|&(kind, confidence)| ActivityEntry {
                            kind: kind.to_string(),
                            confidence,
                        })
                        .collect(),
                }]);
            }
        }

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GeneratorConfig {
        GeneratorConfig {
            record_count: 10,
            interval_seconds: 60,
            start_timestamp_ms: 1000,
        }
    }

    #[test]
    fn test_rotation_repeats_every_six() {
        for i in 0..60 {
            assert_eq!(
                RecordShape::for_index(i),
                SHAPE_ROTATION[(i % 6) as usize],
                "wrong shape at index {i}"
            );
        }
        assert_eq!(RecordShape::for_index(5), RecordShape::Activity);
        assert_eq!(RecordShape::for_index(11), RecordShape::Activity);
    }

    #[test]
    fn test_plain_record_has_no_extensions() {
        let record = LocationRecord::at_index(0, &test_config());
        assert_eq!(record.timestamp_ms, "1000");
        assert!(record.altitude.is_none());
        assert!(record.vertical_accuracy.is_none());
        assert!(record.activity.is_none());
    }

    #[test]
    fn test_altitude_record_fields() {
        // Index 2 is the first altitude slot in the rotation
        let record = LocationRecord::at_index(2, &test_config());
        assert_eq!(record.altitude, Some(rules::altitude(2)));
        assert_eq!(record.vertical_accuracy, Some(rules::vertical_accuracy(2)));
        assert!(record.activity.is_none());
    }

    #[test]
    fn test_activity_record_classifications() {
        let record = LocationRecord::at_index(5, &test_config());
        let samples = record.activity.expect("index 5 must carry activity");
        assert_eq!(samples.len(), 1);

        let entries = &samples[0].activity;
        assert_eq!(entries.len(), 4);
        let confidences: Vec<u32> = entries.iter().map(|e| e.confidence).collect();
        assert_eq!(confidences, vec![56, 38, 5, 1]);
        assert_eq!(entries[0].kind, "UNKNOWN");
        assert_eq!(entries[1].kind, "STILL");
        assert_eq!(entries[2].kind, "IN_VEHICLE");
        assert_eq!(entries[3].kind, "TILTING");
    }

    #[test]
    fn test_activity_timestamp_offset() {
        let config = test_config();
        let record = LocationRecord::at_index(5, &config);
        let samples = record.activity.unwrap();

        let base: i64 = record.timestamp_ms.parse().unwrap();
        let nested: i64 = samples[0].timestamp_ms.parse().unwrap();
        assert_eq!(nested, base + rules::activity_time_offset(5, 60));
    }

    #[test]
    fn test_record_is_deterministic() {
        let config = test_config();
        assert_eq!(
            LocationRecord::at_index(7, &config),
            LocationRecord::at_index(7, &config)
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let record = LocationRecord::at_index(5, &test_config());
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("timestampMs").is_some_and(|v| v.is_string()));
        assert!(json.get("latitudeE7").is_some());
        assert!(json.get("longitudeE7").is_some());
        assert!(json.get("accuracy").is_some());
        // Absent optionals must not serialize as null
        let plain = serde_json::to_value(LocationRecord::at_index(0, &test_config())).unwrap();
        assert!(plain.get("altitude").is_none());
        assert!(plain.get("verticalAccuracy").is_none());
        assert!(plain.get("activity").is_none());
    }
}
