// src/related_job_positions.rs
//! Related job positions: submit a job title, get back a status URL to poll

use reqwest::Method;
use std::sync::Arc;
use tracing::info;

use crate::core::{JobType, ResultFetcher, SharpApiTransport};
use crate::error::Result;
use crate::types::{RelatedJobPositionsRequest, RelatedJobPositionsResult};

pub struct RelatedJobPositionsClient<T> {
    transport: Arc<T>,
}

impl<T> Clone for RelatedJobPositionsClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: SharpApiTransport> RelatedJobPositionsClient<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Queue a job listing positions related to `job_position_name`, each with
    /// a weight from 1.0 to 10.0. Returns the status URL to poll for the list.
    ///
    /// An empty `language` or a `max_quantity` of zero is treated as not given.
    pub async fn related_job_positions(
        &self,
        job_position_name: &str,
        language: Option<&str>,
        max_quantity: Option<u32>,
    ) -> Result<String> {
        let payload = RelatedJobPositionsRequest::new(job_position_name, language, max_quantity);
        let body = serde_json::to_value(&payload)?;

        info!("Requesting positions related to: {}", job_position_name);

        let response = self
            .transport
            .submit(
                Method::POST,
                JobType::HrRelatedJobPositions.url(),
                Some(body),
            )
            .await?;

        self.transport.extract_status_url(&response)
    }
}

impl<T: SharpApiTransport + ResultFetcher> RelatedJobPositionsClient<T> {
    /// Wait for a submitted job and decode its related positions
    pub async fn fetch_related_job_positions(
        &self,
        status_url: &str,
    ) -> Result<RelatedJobPositionsResult> {
        let job = self.transport.fetch_results(status_url).await?;
        job.result_as()
    }
}
