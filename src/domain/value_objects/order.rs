//! Display Order Value Object
//!
//! Explicit integer controlling display sequence. Objects without an order
//! rank after every ordered object.

use serde::{Deserialize, Deserializer, Serialize};

/// Rank used for objects that carry no order
pub const UNORDERED_RANK: i64 = 999;

/// Optional display order of a content object
///
/// The store hands numeric metafields back as numbers, numeric strings, `null`
/// or `""` when the field was never filled in. Anything that is not a number
/// counts as unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct DisplayOrder(Option<i64>);

impl DisplayOrder {
    pub fn new(order: i64) -> Self {
        Self(Some(order))
    }

    pub fn unset() -> Self {
        Self(None)
    }

    pub fn value(&self) -> Option<i64> {
        self.0
    }

    /// Sort key: the explicit order, or [`UNORDERED_RANK`]
    ///
    /// An explicit `0` is a real order and sorts first. Only an unset order
    /// ranks last.
    pub fn rank(&self) -> i64 {
        self.0.unwrap_or(UNORDERED_RANK)
    }
}

impl From<Option<i64>> for DisplayOrder {
    fn from(value: Option<i64>) -> Self {
        Self(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOrder {
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for DisplayOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawOrder>::deserialize(deserializer)?;
        let order = match raw {
            None => None,
            Some(RawOrder::Int(n)) => Some(n),
            Some(RawOrder::Float(f)) if f.is_finite() => Some(f.trunc() as i64),
            Some(RawOrder::Float(_)) => None,
            Some(RawOrder::Text(text)) => parse_text(&text),
        };
        Ok(Self(order))
    }
}

/// Deserialize a numeric metafield that may be a number, a numeric string,
/// `null` or `""`
pub(crate) fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawOrder>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(RawOrder::Int(n)) => Some(n as f64),
        Some(RawOrder::Float(f)) => Some(f).filter(|f| f.is_finite()),
        Some(RawOrder::Text(text)) => text.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
    })
}

fn parse_text(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<i64>().ok().or_else(|| {
        text.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64)
    })
}
