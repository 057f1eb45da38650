// src/types/request.rs
use serde::{Deserialize, Serialize};

/// Body posted to the related job positions endpoint.
///
/// Optional fields are left out of the JSON entirely when unset; an empty
/// language or a zero quantity counts as unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedJobPositionsRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<u32>,
}

impl RelatedJobPositionsRequest {
    pub fn new(job_position_name: &str, language: Option<&str>, max_quantity: Option<u32>) -> Self {
        Self {
            content: job_position_name.to_string(),
            language: language.filter(|l| !l.is_empty()).map(str::to_string),
            max_quantity: max_quantity.filter(|&q| q != 0),
        }
    }
}
