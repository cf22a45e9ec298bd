//! In-memory content store
//!
//! Evaluates the same query model as the remote store against a list of JSON
//! objects. Used for offline rendering from a fixture file and as the test
//! double for the application layer.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::NewSubmission;
use crate::domain::ports::{ContentStore, StoreError, StoreResult};
use crate::domain::value_objects::ObjectQuery;
use crate::error::{VitrineError, VitrineResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<Vec<Value>>,
    next_id: AtomicU64,
    read_failure: Option<StoreError>,
    write_failure: Option<StoreError>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_objects(objects: Vec<Value>) -> Self {
        Self {
            objects: Mutex::new(objects),
            ..Self::default()
        }
    }

    /// Load objects from a JSON file holding `{"objects": [...]}` or a bare array
    pub fn from_fixture(path: &Path) -> VitrineResult<Self> {
        let content = fs::read_to_string(path)?;
        let invalid = |message: String| VitrineError::InvalidFixture {
            file: path.to_path_buf(),
            message,
        };

        let value: Value = serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;
        let objects = match value {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("objects") {
                Some(Value::Array(items)) => items,
                _ => return Err(invalid("expected an \"objects\" array".to_string())),
            },
            _ => return Err(invalid("expected an array or an object".to_string())),
        };

        tracing::debug!(file = %path.display(), count = objects.len(), "loaded content fixture");
        Ok(Self::with_objects(objects))
    }

    /// Fail every read with `error`
    pub fn failing_reads(mut self, error: StoreError) -> Self {
        self.read_failure = Some(error);
        self
    }

    /// Fail every insert with `error`
    pub fn failing_writes(mut self, error: StoreError) -> Self {
        self.write_failure = Some(error);
        self
    }

    /// Snapshot of every stored object
    pub fn objects(&self) -> Vec<Value> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Value>> {
        // A poisoned lock only means another test thread panicked mid-insert.
        self.objects.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn select(&self, query: &ObjectQuery) -> StoreResult<Vec<Value>> {
        if let Some(err) = &self.read_failure {
            return Err(err.clone());
        }

        let limit = query.max_results().map(|l| l as usize).unwrap_or(usize::MAX);
        let found: Vec<Value> = self
            .lock()
            .iter()
            .filter(|object| query.matches(object))
            .take(limit)
            .map(|object| query.project(object))
            .collect();

        if found.is_empty() {
            Err(StoreError::NotFound)
        } else {
            Ok(found)
        }
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    fn name(&self) -> String {
        "memory".to_string()
    }

    async fn find_one(&self, query: &ObjectQuery) -> StoreResult<Value> {
        let mut found = self.select(query)?;
        Ok(found.swap_remove(0))
    }

    async fn find(&self, query: &ObjectQuery) -> StoreResult<Vec<Value>> {
        self.select(query)
    }

    async fn insert_one(&self, submission: &NewSubmission) -> StoreResult<Value> {
        if let Some(err) = &self.write_failure {
            return Err(err.clone());
        }

        let mut object =
            serde_json::to_value(submission).map_err(|e| StoreError::Decode(e.to_string()))?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(fields) = object.as_object_mut() {
            fields.insert("id".to_string(), Value::String(format!("mem-{id}")));
            fields.insert(
                "slug".to_string(),
                Value::String(format!("contact-submission-{id}")),
            );
        }

        self.lock().push(object.clone());
        Ok(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ContactForm;
    use crate::domain::value_objects::{ContentType, LIST_PROPS};
    use chrono::Utc;
    use serde_json::json;
    use std::io::Write;

    fn store() -> MemoryStore {
        MemoryStore::with_objects(vec![
            json!({"id": "1", "slug": "a", "title": "A", "type": "projects", "metadata": {"featured": true}}),
            json!({"id": "2", "slug": "b", "title": "B", "type": "projects", "metadata": {"featured": false}}),
            json!({"id": "3", "slug": "rust", "title": "Rust", "type": "skills", "metadata": {}}),
        ])
    }

    #[tokio::test]
    async fn find_filters_by_type_and_metadata() {
        let store = store();

        let all = store.find(&ObjectQuery::of(ContentType::Projects)).await.unwrap();
        assert_eq!(all.len(), 2);

        let featured = store
            .find(&ObjectQuery::of(ContentType::Projects).filter("metadata.featured", true))
            .await
            .unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0]["id"], "1");
    }

    #[tokio::test]
    async fn empty_result_is_not_found() {
        let store = store();
        let err = store
            .find(&ObjectQuery::of(ContentType::Experience))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[tokio::test]
    async fn find_one_by_slug_projects_props() {
        let store = store();
        let object = store
            .find_one(&ObjectQuery::by_slug(ContentType::Skills, "rust").props(LIST_PROPS))
            .await
            .unwrap();
        assert_eq!(object["title"], "Rust");
        assert!(object.get("type").is_none());
    }

    #[tokio::test]
    async fn insert_assigns_ids() {
        let store = MemoryStore::new();
        let submission =
            NewSubmission::from_form(&ContactForm::new("Ada", "ada@example.com", "hi"), Utc::now());

        let first = store.insert_one(&submission).await.unwrap();
        let second = store.insert_one(&submission).await.unwrap();
        assert_ne!(first["id"], second["id"]);
        assert_eq!(store.objects().len(), 2);
    }

    #[tokio::test]
    async fn forced_failures_are_returned() {
        let store = store().failing_reads(StoreError::Transport("offline".to_string()));
        let err = store
            .find(&ObjectQuery::of(ContentType::Projects))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::Transport("offline".to_string()));
    }

    #[test]
    fn fixture_accepts_both_shapes() {
        let mut wrapped = tempfile::NamedTempFile::new().unwrap();
        write!(wrapped, r#"{{"objects": [{{"id": "1", "type": "skills", "metadata": {{}}}}]}}"#)
            .unwrap();
        assert_eq!(MemoryStore::from_fixture(wrapped.path()).unwrap().objects().len(), 1);

        let mut bare = tempfile::NamedTempFile::new().unwrap();
        write!(bare, r#"[{{"id": "1"}}, {{"id": "2"}}]"#).unwrap();
        assert_eq!(MemoryStore::from_fixture(bare.path()).unwrap().objects().len(), 2);

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, r#"{{"items": []}}"#).unwrap();
        assert!(matches!(
            MemoryStore::from_fixture(bad.path()),
            Err(VitrineError::InvalidFixture { .. })
        ));
    }
}
