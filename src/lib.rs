//! Client for the SharpAPI related job positions endpoint.
//!
//! ```no_run
//! use std::sync::Arc;
//! use related_job_positions::{ClientConfig, RelatedJobPositionsClient, ServiceClient};
//!
//! # async fn run() -> related_job_positions::Result<()> {
//! let service = Arc::new(ServiceClient::new(&ClientConfig::new("api-key"))?);
//! let client = RelatedJobPositionsClient::new(service);
//!
//! let status_url = client
//!     .related_job_positions("Software Engineer", Some("English"), Some(10))
//!     .await?;
//! let result = client.fetch_related_job_positions(&status_url).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod related_job_positions;
pub mod types;

pub use config::ClientConfig;
pub use crate::core::{JobType, PollingConfig, ServiceClient, SharpApiTransport};
pub use error::{Result, ServiceError};
pub use related_job_positions::RelatedJobPositionsClient;
