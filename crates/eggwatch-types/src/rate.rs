//! Serde adapter for rates that may legitimately be infinite.
//!
//! JSON has no literal for infinity and `serde_json` writes non-finite
//! floats as `null`, which it then refuses to read back. Finite values stay
//! plain numbers; non-finite ones are written as `"inf"`, `"-inf"` or
//! `"nan"`. Use with `#[serde(with = "crate::rate")]`.

use serde::{Deserialize, Deserializer, Serializer};

/// Serialize a rate, spelling non-finite values as strings.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("nan")
    } else if value.is_sign_positive() {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}

/// Wire shapes accepted for a rate.
#[derive(Deserialize)]
#[serde(untagged)]
enum RateRepr {
    Number(f64),
    Text(String),
}

/// Deserialize a rate written by [`serialize`].
pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RateRepr::deserialize(deserializer)? {
        RateRepr::Number(value) => Ok(value),
        RateRepr::Text(text) => match text.as_str() {
            "inf" => Ok(f64::INFINITY),
            "-inf" => Ok(f64::NEG_INFINITY),
            "nan" => Ok(f64::NAN),
            other => Err(serde::de::Error::custom(format!(
                "invalid rate: {other:?}"
            ))),
        },
    }
}
