//! Content Store Port
//!
//! Abstracts the remote object store the portfolio content lives in.
//! Queries return raw JSON objects; typing them is the caller's concern.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::entities::NewSubmission;
use crate::domain::value_objects::ObjectQuery;

/// Errors from a content store
///
/// `NotFound` is an expected outcome (empty collection, missing singleton)
/// and callers recover it into an empty value. Everything else is a real
/// failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Nothing matched the query
    #[error("no objects found")]
    NotFound,

    /// The store rejected the credentials
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// The store returned an error response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (DNS, connect, timeout, TLS)
    #[error("request failed: {0}")]
    Transport(String),

    /// A response could not be read as the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Writes are not configured (no write key)
    #[error("writes are disabled: no write key configured")]
    WriteDisabled,
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Human-readable name used in logs
    fn name(&self) -> String;

    /// First object matching `query`
    async fn find_one(&self, query: &ObjectQuery) -> StoreResult<Value>;

    /// All objects matching `query`, in store order
    async fn find(&self, query: &ObjectQuery) -> StoreResult<Vec<Value>>;

    /// Create a contact submission, returning the created object
    async fn insert_one(&self, submission: &NewSubmission) -> StoreResult<Value>;
}
