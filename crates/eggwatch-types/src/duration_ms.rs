//! Serde adapter that stores a signed [`TimeDelta`] as whole milliseconds.
//!
//! `chrono` does not implement `Serialize` for [`TimeDelta`], so fields use
//! `#[serde(with = "crate::duration_ms")]`. Negative values round-trip, which
//! matters for snapshots taken after a deadline has passed.

use chrono::TimeDelta;
use serde::{Deserialize, Deserializer, Serializer};

/// Serialize a duration as signed milliseconds.
pub fn serialize<S>(value: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i64(value.num_milliseconds())
}

/// Deserialize a duration from signed milliseconds.
///
/// Values outside the range chrono can represent are rejected.
pub fn deserialize<'de, D>(deserializer: D) -> Result<TimeDelta, D::Error>
where
    D: Deserializer<'de>,
{
    let ms = i64::deserialize(deserializer)?;
    TimeDelta::try_milliseconds(ms)
        .ok_or_else(|| serde::de::Error::custom(format!("duration out of range: {ms}ms")))
}
