//! OpenCollab HTTP client
//!
//! reqwest-backed adapter for the OpenCollab campaign API. Wire the
//! submission flow up like this:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use collab_apply::{ports::StaticCredentials, SubmissionFlow};
//! use collab_client::{ClientConfig, HttpCampaignApi};
//!
//! # fn main() -> Result<(), collab_client::ClientError> {
//! let api = HttpCampaignApi::new(
//!     ClientConfig::default(),
//!     Arc::new(StaticCredentials::new("token")),
//! )?;
//! let flow = SubmissionFlow::new(Arc::new(api));
//! # let _ = flow;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod http;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use http::{ClientError, HttpCampaignApi};
