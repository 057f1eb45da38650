// src/core/mod.rs
//! Shared SharpAPI plumbing used by every endpoint wrapper

pub mod job_type;
pub mod polling;
pub mod service_client;
pub mod transport;

pub use job_type::JobType;
pub use polling::PollingConfig;
pub use service_client::ServiceClient;
pub use transport::{RawResponse, ResultFetcher, SharpApiTransport};
