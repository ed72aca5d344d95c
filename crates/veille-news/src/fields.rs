//! Per-field defensive decoding helpers.

use serde::{Deserialize, Deserializer};

/// Decode a provider field as `Option<String>`, treating any non-string
/// value as absent.
///
/// Providers occasionally ship numbers, arrays, or objects where a string is
/// documented; one bad field must cost that field, not the batch. Combine
/// with `#[serde(default)]` so a missing key decodes too.
pub(crate) fn lossy_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}
