//! Content Object Entity
//!
//! Common envelope shared by every record in the content store. The
//! `metadata` payload is what distinguishes one content type from another.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::DisplayOrder;

/// A record in the remote content store
///
/// List queries only project `id`, `title`, `slug` and `metadata`, so every
/// other envelope field is optional on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentObject<M = Map<String, Value>> {
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub metadata: M,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

/// Metadata that carries an explicit display order
pub trait Ordered {
    fn display_order(&self) -> DisplayOrder;
}

impl<M: Ordered> ContentObject<M> {
    /// Sort rank of this object (unset orders rank last)
    pub fn rank(&self) -> i64 {
        self.metadata.display_order().rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_projected_list_item() {
        let object: ContentObject = serde_json::from_str(
            r#"{"id": "abc", "title": "Rust", "slug": "rust", "metadata": {"order": 1}}"#,
        )
        .unwrap();

        assert_eq!(object.id, "abc");
        assert_eq!(object.kind, "");
        assert!(object.created_at.is_none());
        assert_eq!(object.metadata["order"], 1);
    }

    #[test]
    fn parses_full_envelope() {
        let object: ContentObject = serde_json::from_str(
            r#"{
                "id": "abc",
                "slug": "rust",
                "title": "Rust",
                "content": "",
                "metadata": {},
                "type": "skills",
                "created_at": "2024-02-01T10:00:00.000Z",
                "modified_at": "2024-02-03T10:00:00.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(object.kind, "skills");
        assert!(object.created_at.unwrap() < object.modified_at.unwrap());
    }
}
