//! OpenCollab campaign application flow
//!
//! The client-side pipeline that turns a filled address form plus campaign
//! fields into one application submission:
//!
//! - ordered validation with first-failure-wins semantics
//! - named alias resolution for legacy field names
//! - display-address assembly with line de-duplication
//! - an explicit submission state machine (no double submits, duplicates
//!   are terminal)
//! - the agreement gate that intercepts unacknowledged submits
//!
//! Network access goes through the [`ports::CampaignApi`] trait; the
//! `collab-client` crate provides the HTTP implementation.

use thiserror::Error;

pub mod campaign;
pub mod draft;
pub mod flow;
pub mod gate;
pub mod payload;
pub mod ports;
pub mod resolve;
pub mod validation;

pub use campaign::{ApplicantProfile, Campaign, ContentFormat, PricingModel};
pub use draft::ApplicationDraft;
pub use flow::{ApplyOutcome, FlowState, SubmissionFlow, SubmitAttempt};
pub use gate::{AgreementGate, GateDecision};
pub use payload::{ApplicationPayload, InternationalAddress};
pub use ports::{ApiError, AppliedStatus, ApplyResponse, CampaignApi, CredentialProvider};
pub use validation::{normalize_tiktok_id, validate, ValidationError};

/// Error type for the submission flow.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplyError {
    #[error(transparent)]
    Validation(#[from] validation::ValidationError),

    #[error(transparent)]
    Flow(#[from] flow::FlowError),
}

pub type Result<T> = std::result::Result<T, ApplyError>;
