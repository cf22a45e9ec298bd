//! HTTP adapter for the headless object store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;

use super::wire::{ErrorBody, ObjectEnvelope, ObjectsEnvelope};
use crate::domain::entities::NewSubmission;
use crate::domain::ports::{ContentStore, StoreError, StoreResult};
use crate::domain::value_objects::ObjectQuery;

/// Default read API base URL
pub const DEFAULT_API_URL: &str = "https://api.cosmicjs.com/v3";
/// Default write API base URL
pub const DEFAULT_WRITE_URL: &str = "https://workers.cosmicjs.com/v3";
const CONNECT_TIMEOUT_SECS: u64 = 8;
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`CosmicStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CosmicOptions {
    pub bucket_slug: String,
    pub read_key: String,
    /// Only the contact submission insert needs it
    pub write_key: Option<String>,
    pub api_url: String,
    pub write_url: String,
    pub timeout: Duration,
}

impl CosmicOptions {
    pub fn new(bucket_slug: impl Into<String>, read_key: impl Into<String>) -> Self {
        Self {
            bucket_slug: bucket_slug.into(),
            read_key: read_key.into(),
            write_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            write_url: DEFAULT_WRITE_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_write_key(mut self, write_key: impl Into<String>) -> Self {
        self.write_key = Some(write_key.into());
        self
    }

    /// Point reads and writes at the same base URL (local mirrors, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.api_url = base_url.clone();
        self.write_url = base_url;
        self
    }
}

/// Content store backed by the remote object API
///
/// Reads authenticate with the read key as a query parameter; the insert
/// authenticates with the write key as a bearer token.
#[derive(Clone)]
pub struct CosmicStore {
    options: CosmicOptions,
    http: Client,
}

impl CosmicStore {
    pub fn new(options: CosmicOptions) -> StoreResult<Self> {
        let http = Client::builder()
            .timeout(options.timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        Ok(Self { options, http })
    }

    pub fn options(&self) -> &CosmicOptions {
        &self.options
    }

    fn objects_url(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        format!("{base}/buckets/{}/objects", self.options.bucket_slug)
    }

    fn read_request(&self, query: &ObjectQuery) -> RequestBuilder {
        let mut params: Vec<(&str, String)> = vec![
            ("read_key", self.options.read_key.clone()),
            ("query", query.selector().to_string()),
        ];
        if !query.requested_props().is_empty() {
            params.push(("props", query.requested_props().join(",")));
        }
        if let Some(depth) = query.relation_depth() {
            params.push(("depth", depth.to_string()));
        }
        if let Some(limit) = query.max_results() {
            params.push(("limit", limit.to_string()));
        }

        self.http
            .get(self.objects_url(&self.options.api_url))
            .query(&params)
    }

    async fn send(&self, request: RequestBuilder) -> StoreResult<Response> {
        let response = request.send().await.map_err(transport_error)?;
        check_response(response).await
    }
}

#[async_trait]
impl ContentStore for CosmicStore {
    fn name(&self) -> String {
        format!("cosmic:{}", self.options.bucket_slug)
    }

    async fn find_one(&self, query: &ObjectQuery) -> StoreResult<Value> {
        let query = query.clone().limit(1);
        let mut objects = self.find(&query).await?;
        if objects.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(objects.swap_remove(0))
    }

    async fn find(&self, query: &ObjectQuery) -> StoreResult<Vec<Value>> {
        tracing::debug!(
            store = %self.name(),
            selector = %query.selector(),
            "querying objects"
        );
        let response = self.send(self.read_request(query)).await?;
        let envelope: ObjectsEnvelope = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        tracing::debug!(
            count = envelope.objects.len(),
            total = ?envelope.total,
            "objects received"
        );
        Ok(envelope.objects)
    }

    async fn insert_one(&self, submission: &NewSubmission) -> StoreResult<Value> {
        let write_key = self
            .options
            .write_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(StoreError::WriteDisabled)?;

        let request = self
            .http
            .post(self.objects_url(&self.options.write_url))
            .bearer_auth(write_key)
            .json(submission);
        let response = self.send(request).await?;
        let envelope: ObjectEnvelope = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(envelope.object)
    }
}

fn transport_error(err: reqwest::Error) -> StoreError {
    if err.is_timeout() {
        StoreError::Transport("request timed out".to_string())
    } else {
        StoreError::Transport(err.to_string())
    }
}

async fn check_response(response: Response) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    Err(match status {
        StatusCode::NOT_FOUND => StoreError::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StoreError::Unauthorized { message },
        _ => StoreError::Api {
            status: status.as_u16(),
            message,
        },
    })
}
