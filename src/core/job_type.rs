// src/core/job_type.rs
//! Job types accepted by SharpAPI and the endpoint path each one is posted to

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobType {
    HrRelatedJobPositions,
}

impl JobType {
    /// Endpoint path relative to the API base URL
    pub fn url(&self) -> &'static str {
        match self {
            JobType::HrRelatedJobPositions => "/hr/related_job_positions",
        }
    }

    /// Identifier reported back in the job status `type` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::HrRelatedJobPositions => "hr_related_job_positions",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
