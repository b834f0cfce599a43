//! Lenient decoding helpers for backend JSON.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(serde_json::Number),
}

/// Decode a field the backend may send as a string, a number or null.
///
/// Null becomes an empty string so the form always has something to edit.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(StringOrNumber::Text(text)) => text,
        Some(StringOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
