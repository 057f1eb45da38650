// src/error.rs
//! Errors raised by the SharpAPI transport and surfaced unchanged by the
//! endpoint wrappers.

use serde_json::Value;
use thiserror::Error;

pub type Result<T, E = ServiceError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("authentication rejected with status {status}: {body}")]
    Unauthorized { status: u16, body: String },

    #[error("rate limited by SharpAPI (retry after {retry_after:?}s)")]
    RateLimited { retry_after: Option<u64> },

    #[error("SharpAPI returned status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),

    #[error("job {job_id} failed: {result}")]
    JobFailed { job_id: String, result: Value },

    #[error("job did not finish within {waited_secs}s")]
    PollingTimeout { waited_secs: u64 },
}

impl ServiceError {
    /// Classify a non-success response.
    pub fn from_status(status: u16, retry_after: Option<u64>, body: String) -> Self {
        match status {
            401 | 403 => ServiceError::Unauthorized { status, body },
            429 => ServiceError::RateLimited { retry_after },
            _ => ServiceError::Http { status, body },
        }
    }

    /// HTTP status behind this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Request(e) => e.status().map(|s| s.as_u16()),
            ServiceError::Unauthorized { status, .. } | ServiceError::Http { status, .. } => {
                Some(*status)
            }
            ServiceError::RateLimited { .. } => Some(429),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classifies_auth_failures() {
        let err = ServiceError::from_status(401, None, "Unauthenticated.".to_string());
        assert!(matches!(err, ServiceError::Unauthorized { status: 401, .. }));

        let err = ServiceError::from_status(403, None, String::new());
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_from_status_keeps_retry_after_for_rate_limits() {
        let err = ServiceError::from_status(429, Some(30), String::new());
        assert!(matches!(
            err,
            ServiceError::RateLimited {
                retry_after: Some(30)
            }
        ));
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn test_serde_errors_convert_with_question_mark() {
        fn parse(raw: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(raw)?)
        }

        let err = parse("{").unwrap_err();
        assert!(matches!(err, ServiceError::Serialization(_)));
        assert!(err.to_string().starts_with("failed to serialize request body"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_from_status_falls_back_to_http() {
        let err = ServiceError::from_status(422, None, "content is required".to_string());
        assert_eq!(
            err.to_string(),
            "SharpAPI returned status 422: content is required"
        );
    }
}
