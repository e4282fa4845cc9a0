//! Lenient monetary amounts.
//!
//! Stored blobs may carry totals as JSON numbers or as numeric strings
//! (older frontends wrote whatever the form field held). Anything that
//! does not parse as a number reads as zero rather than failing the
//! whole blob.

use serde::{Deserialize, Deserializer};

/// Coerce a JSON value to a monetary amount, defaulting to zero.
pub fn from_value(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Deserializer for `#[serde(deserialize_with = "amount::lenient")]`.
pub fn lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(from_value(&raw))
}
