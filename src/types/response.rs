// src/types/response.rs
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ServiceError};

// ===== Submission =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUrlResponse {
    pub status_url: String,
    pub job_id: Option<String>,
}

// ===== Job status =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    New,
    Pending,
    InProgress,
    Success,
    Failed,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Success | JobStatus::Failed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusEnvelope {
    pub data: ApiJob,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiJob {
    pub id: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub attributes: ApiJobAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiJobAttributes {
    pub status: JobStatus,
    #[serde(rename = "type")]
    pub job_type: String,
    #[serde(default)]
    pub result: Value,
}

impl ApiJob {
    pub fn status(&self) -> JobStatus {
        self.attributes.status
    }

    /// Decode the job result into an endpoint-specific type
    pub fn result_as<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.attributes.result.clone()).map_err(|e| {
            ServiceError::MalformedResponse(format!(
                "unexpected result for job {} ({}): {}",
                self.id, self.attributes.job_type, e
            ))
        })
    }
}

// ===== Related job positions =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedJobPosition {
    pub name: String,
    /// Relevance from 1.0 to 10.0, 10 being the closest match
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedJobPositionsResult {
    pub job_position: String,
    #[serde(default)]
    pub related_job_positions: Vec<RelatedJobPosition>,
}

// ===== Utility endpoints =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ping {
    pub ping: String,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Quota {
    pub timestamp: Option<DateTime<Utc>>,
    pub on_trial: Option<bool>,
    pub trial_ends: Option<DateTime<Utc>>,
    pub subscribed: Option<bool>,
    pub current_subscription_start: Option<DateTime<Utc>>,
    pub current_subscription_end: Option<DateTime<Utc>>,
    pub subscription_words_quota: Option<u64>,
    pub subscription_words_used: Option<u64>,
    pub subscription_words_used_percentage: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn success_envelope() -> Value {
        json!({
            "data": {
                "type": "api_job_result",
                "id": "5a113c4d-38e9-43e5-80f4-ec3fdea420e9",
                "attributes": {
                    "status": "success",
                    "type": "hr_related_job_positions",
                    "result": {
                        "job_position": "Flutter Mobile Developer",
                        "related_job_positions": [
                            { "name": "Mobile Application Developer", "weight": 9.5 },
                            { "name": "Android Developer", "weight": 8.5 }
                        ]
                    }
                }
            }
        })
    }

    #[test]
    fn test_decode_success_envelope() {
        let envelope: JobStatusEnvelope = serde_json::from_value(success_envelope()).unwrap();
        let job = envelope.data;
        assert_eq!(job.status(), JobStatus::Success);
        assert_eq!(job.attributes.job_type, "hr_related_job_positions");

        let result: RelatedJobPositionsResult = job.result_as().unwrap();
        assert_eq!(result.job_position, "Flutter Mobile Developer");
        assert_eq!(result.related_job_positions.len(), 2);
        assert_eq!(result.related_job_positions[0].weight, 9.5);
    }

    #[test]
    fn test_unknown_status_is_not_terminal() {
        let status: JobStatus = serde_json::from_value(json!("queued")).unwrap();
        assert_eq!(status, JobStatus::Unknown);
        assert!(!status.is_terminal());
        assert!(JobStatus::Failed.is_terminal());

        let status: JobStatus = serde_json::from_value(json!("in_progress")).unwrap();
        assert_eq!(status, JobStatus::InProgress);
    }

    #[test]
    fn test_result_as_reports_malformed_result() {
        let mut envelope = success_envelope();
        envelope["data"]["attributes"]["result"] = json!(["not", "an", "object"]);
        let envelope: JobStatusEnvelope = serde_json::from_value(envelope).unwrap();

        let err = envelope
            .data
            .result_as::<RelatedJobPositionsResult>()
            .unwrap_err();
        assert!(matches!(err, ServiceError::MalformedResponse(_)));
    }

    #[test]
    fn test_quota_tolerates_missing_fields() {
        let quota: Quota = serde_json::from_value(json!({
            "on_trial": false,
            "subscription_words_quota": 100000,
            "subscription_words_used": 1234
        }))
        .unwrap();
        assert_eq!(quota.on_trial, Some(false));
        assert_eq!(quota.subscription_words_used, Some(1234));
        assert!(quota.trial_ends.is_none());
    }
}
