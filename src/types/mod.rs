pub mod request;
pub mod response;

pub use request::RelatedJobPositionsRequest;
pub use response::{
    ApiJob, JobStatus, Ping, Quota, RelatedJobPosition, RelatedJobPositionsResult,
    StatusUrlResponse,
};
