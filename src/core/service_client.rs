// src/core/service_client.rs
//! SharpAPI HTTP client - authenticated JSON requests, status URL parsing and job polling

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, RETRY_AFTER};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::config::ClientConfig;
use crate::core::polling::PollingConfig;
use crate::core::transport::{RawResponse, ResultFetcher, SharpApiTransport};
use crate::error::{Result, ServiceError};
use crate::types::response::{
    ApiJob, JobStatus, JobStatusEnvelope, Ping, Quota, StatusUrlResponse,
};

const PING_ENDPOINT: &str = "/ping";
const QUOTA_ENDPOINT: &str = "/quota";

#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
    polling: PollingConfig,
}

impl ServiceClient {
    /// Create new service client with configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .map_err(|_| ServiceError::InvalidHeader("Authorization"))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| ServiceError::InvalidHeader("User-Agent"))?;

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            polling: config.polling.clone(),
        })
    }

    /// Check that the API is reachable
    pub async fn ping(&self) -> Result<Ping> {
        self.get(PING_ENDPOINT).await
    }

    /// Subscription and word usage for the configured key
    pub async fn quota(&self) -> Result<Quota> {
        self.get(QUOTA_ENDPOINT).await
    }

    async fn get<R>(&self, endpoint: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!("GET {}", url);

        let raw = self.send(self.client.get(&url)).await?;
        serde_json::from_value(raw.body).map_err(|e| {
            ServiceError::MalformedResponse(format!("unexpected body from {}: {}", url, e))
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn send(&self, request: RequestBuilder) -> Result<RawResponse> {
        let response = request.send().await?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let text = response.text().await?;

        if !status.is_success() {
            error!("SharpAPI error {}: {}", status, text);
            return Err(ServiceError::from_status(status.as_u16(), retry_after, text));
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| {
                ServiceError::MalformedResponse(format!("response is not JSON ({}): {}", e, text))
            })?
        };

        Ok(RawResponse {
            status: status.as_u16(),
            retry_after,
            body,
        })
    }
}

#[async_trait]
impl SharpApiTransport for ServiceClient {
    async fn submit(&self, method: Method, path: &str, body: Option<Value>) -> Result<RawResponse> {
        let url = self.url(path);
        info!("Calling SharpAPI: {} {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = self.send(request).await?;
        debug!("SharpAPI accepted job with status {}", response.status);
        Ok(response)
    }

    fn extract_status_url(&self, response: &RawResponse) -> Result<String> {
        let parsed: StatusUrlResponse =
            serde_json::from_value(response.body.clone()).map_err(|e| {
                ServiceError::MalformedResponse(format!(
                    "status_url missing from response ({}): {}",
                    e, response.body
                ))
            })?;

        if let Some(job_id) = parsed.job_id.as_deref() {
            debug!("Queued job {}", job_id);
        }
        Ok(parsed.status_url)
    }
}

#[async_trait]
impl ResultFetcher for ServiceClient {
    async fn fetch_results(&self, status_url: &str) -> Result<ApiJob> {
        let started = Instant::now();

        loop {
            let RawResponse {
                retry_after, body, ..
            } = self.send(self.client.get(status_url)).await?;

            let envelope: JobStatusEnvelope = serde_json::from_value(body).map_err(|e| {
                ServiceError::MalformedResponse(format!("unexpected job status body: {}", e))
            })?;
            let job = envelope.data;

            let status = job.status();
            let elapsed = started.elapsed();

            if status.is_terminal() {
                if status == JobStatus::Success {
                    info!("Job {} finished after {}s", job.id, elapsed.as_secs());
                    return Ok(job);
                }

                warn!("Job {} failed", job.id);
                return Err(ServiceError::JobFailed {
                    job_id: job.id,
                    result: job.attributes.result,
                });
            }

            let Some(wait) = self.polling.next_wait(retry_after, elapsed) else {
                warn!("Gave up on job {} after {}s", job.id, elapsed.as_secs());
                return Err(ServiceError::PollingTimeout {
                    waited_secs: elapsed.as_secs(),
                });
            };

            debug!(
                "Job {} is {:?}, polling again in {}s",
                job.id,
                status,
                wait.as_secs()
            );
            tokio::time::sleep(wait).await;
        }
    }
}
