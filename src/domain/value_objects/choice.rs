//! Keyed Choice Value Object
//!
//! Select-style metafields are stored as `{ "key": ..., "value": ... }`,
//! where `key` is the stable identifier and `value` the display label.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A select metafield: stable key plus the label the editor entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice<K> {
    pub key: K,
    #[serde(default)]
    pub value: String,
}

impl<K> Choice<K> {
    pub fn new(key: K, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Deserialize an optional choice, dropping keys outside the known set
///
/// An unrecognized key decodes as `None` with a warning, so one bad record
/// does not fail the whole collection.
pub(crate) fn lenient_choice<'de, D, K>(deserializer: D) -> Result<Option<Choice<K>>, D::Error>
where
    D: Deserializer<'de>,
    K: DeserializeOwned,
{
    let raw = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(raw) => raw,
    };

    match serde_json::from_value::<Choice<K>>(raw.clone()) {
        Ok(choice) => Ok(Some(choice)),
        Err(err) => {
            let key = raw.get("key").cloned().unwrap_or(Value::Null);
            tracing::warn!(%key, error = %err, "ignoring unrecognized choice");
            Ok(None)
        }
    }
}
