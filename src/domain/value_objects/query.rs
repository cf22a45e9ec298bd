//! Object Query Value Object
//!
//! Describes a read against the content store: which type, optionally which
//! slug, equality filters on (dotted) metadata paths, which props to return
//! and how deep to expand related objects.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::ContentType;

/// Props requested for list queries
pub const LIST_PROPS: &[&str] = &["id", "title", "slug", "metadata"];

/// Props requested for the settings singleton
pub const SINGLETON_PROPS: &[&str] = &["id", "title", "metadata"];

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectQuery {
    content_type: ContentType,
    slug: Option<String>,
    filters: BTreeMap<String, Value>,
    props: Vec<String>,
    depth: Option<u8>,
    limit: Option<u32>,
}

impl ObjectQuery {
    /// Query every object of a type
    pub fn of(content_type: ContentType) -> Self {
        Self {
            content_type,
            slug: None,
            filters: BTreeMap::new(),
            props: Vec::new(),
            depth: None,
            limit: None,
        }
    }

    /// Query a single object by type and slug
    pub fn by_slug(content_type: ContentType, slug: impl Into<String>) -> Self {
        let mut query = Self::of(content_type);
        query.slug = Some(slug.into());
        query
    }

    /// Require `path` (e.g. `metadata.featured`) to equal `value`
    pub fn filter(mut self, path: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.insert(path.into(), value.into());
        self
    }

    pub fn props(mut self, props: &[&str]) -> Self {
        self.props = props.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn filters(&self) -> &BTreeMap<String, Value> {
        &self.filters
    }

    /// Requested props (empty means "all")
    pub fn requested_props(&self) -> &[String] {
        &self.props
    }

    pub fn relation_depth(&self) -> Option<u8> {
        self.depth
    }

    pub fn max_results(&self) -> Option<u32> {
        self.limit
    }

    /// The selector document sent as the store's `query` parameter
    pub fn selector(&self) -> Value {
        let mut selector = Map::new();
        selector.insert(
            "type".to_string(),
            Value::String(self.content_type.as_str().to_string()),
        );
        if let Some(slug) = &self.slug {
            selector.insert("slug".to_string(), Value::String(slug.clone()));
        }
        for (path, value) in &self.filters {
            selector.insert(path.clone(), value.clone());
        }
        Value::Object(selector)
    }

    /// True when `object` satisfies the type, slug and filters of this query
    pub fn matches(&self, object: &Value) -> bool {
        if object.get("type").and_then(Value::as_str) != Some(self.content_type.as_str()) {
            return false;
        }
        if let Some(slug) = &self.slug {
            if object.get("slug").and_then(Value::as_str) != Some(slug.as_str()) {
                return false;
            }
        }
        self.filters
            .iter()
            .all(|(path, expected)| lookup_path(object, path) == Some(expected))
    }

    /// Keep only the requested props of `object`
    pub fn project(&self, object: &Value) -> Value {
        if self.props.is_empty() {
            return object.clone();
        }
        let Some(fields) = object.as_object() else {
            return object.clone();
        };
        let projected: Map<String, Value> = fields
            .iter()
            .filter(|(key, _)| self.props.iter().any(|p| p == *key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Value::Object(projected)
    }
}

fn lookup_path<'a>(object: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(object, |current, segment| current.get(segment))
}
