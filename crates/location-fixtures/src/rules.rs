//! Derivation rules for record fields.
//!
//! Every rule is a pure function of the 0-based record index (plus the fixed
//! interval where noted). There is no cross-index state: record N can be
//! derived without generating records 0..N-1, which is what makes the
//! streaming writer possible.

/// Horizontal accuracy in meters: a sawtooth with period 30, range [0, 580].
pub fn accuracy(index: u64) -> i64 {
    20 * (index % 30) as i64
}

/// Altitude in meters, rounded. The index is used directly as an angle in
/// radians, so consecutive records swing across the full ±300 m range.
pub fn altitude(index: u64) -> i64 {
    (300.0 * (index as f64).sin()).round() as i64
}

/// Latitude in E7 fixed-point (degrees scaled by 1e7), bounded to
/// ±900_000_000 by the sine.
pub fn latitude_e7(index: u64) -> i64 {
    (10_000_000.0 * 90.0 * (index as f64 / 1000.0).sin()).round() as i64
}

/// Longitude in E7 fixed-point, bounded to ±1_800_000_000.
pub fn longitude_e7(index: u64) -> i64 {
    (10_000_000.0 * 180.0 * (index as f64 / 1000.0).cos()).round() as i64
}

/// Vertical accuracy in meters, one tenth of the horizontal accuracy.
pub fn vertical_accuracy(index: u64) -> i64 {
    accuracy(index) / 10
}

/// Offset in milliseconds between a record's timestamp and the timestamp of
/// its nested activity sample. The divisor is always at least 1.
pub fn activity_time_offset(index: u64, interval_seconds: i64) -> i64 {
    interval_seconds / (1 + (index % 3) as i64)
}

/// Extra forward jump injected into every 50th record's timestamp.
///
/// The magnitude scales with `index % 10`, so whenever the index is also a
/// multiple of 10 (every 500th record, including index 0) the jump collapses
/// back to zero.
pub fn extra_delay(index: u64, interval_seconds: i64) -> i64 {
    if index % 50 != 0 {
        0
    } else {
        interval_seconds * 100 * (index % 10) as i64
    }
}

/// Timestamp of the record in milliseconds: linear progression from the
/// start time plus the periodic jump from [`extra_delay`].
pub fn timestamp_ms(index: u64, interval_seconds: i64, start_timestamp_ms: i64) -> i64 {
    start_timestamp_ms + index as i64 * 1000 * interval_seconds + extra_delay(index, interval_seconds)
}
