// src/core/transport.rs
//! Seams between endpoint wrappers and the HTTP layer

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::error::Result;
use crate::types::ApiJob;

/// Successful response as seen by endpoint wrappers
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// Seconds from the `Retry-After` header, when the server sent one
    pub retry_after: Option<u64>,
    pub body: Value,
}

#[async_trait]
pub trait SharpApiTransport: Send + Sync {
    /// Send `body` as JSON to `path` (relative to the API base URL).
    async fn submit(&self, method: Method, path: &str, body: Option<Value>) -> Result<RawResponse>;

    /// Pull the status-polling URL out of a job submission response.
    fn extract_status_url(&self, response: &RawResponse) -> Result<String>;
}

#[async_trait]
pub trait ResultFetcher: Send + Sync {
    /// Poll a status URL until the job finishes.
    async fn fetch_results(&self, status_url: &str) -> Result<ApiJob>;
}
