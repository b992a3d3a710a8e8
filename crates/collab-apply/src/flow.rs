//! Submission state machine
//!
//! The application submission flow, expressed as an explicit state enum
//! with guarded transitions instead of early returns and side effects.
//! Submitting while a request is in flight, or after a terminal outcome,
//! is unrepresentable rather than merely discouraged.

use crate::draft::ApplicationDraft;
use crate::gate::AgreementGate;
use crate::payload::ApplicationPayload;
use crate::ports::{ApiError, ApplyResponse, CampaignApi};
use crate::validation::validate;
use crate::{ApplyError, Result};
use chrono::{DateTime, Utc};
use collab_forms::AddressForm;
use std::sync::Arc;
use thiserror::Error;

/// Fallback message when the server gives none.
const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Submission flow state.
#[derive(Clone, Debug, PartialEq)]
pub enum FlowState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    /// Terminal: the user cannot double-apply.
    AlreadyApplied { applied_at: Option<DateTime<Utc>> },
    /// Open for correction and a fresh attempt.
    Failed { message: String },
}

impl FlowState {
    /// Whether a new submission attempt may begin from this state.
    fn ensure_can_begin(&self) -> std::result::Result<(), FlowError> {
        match self {
            Self::Idle | Self::Failed { .. } => Ok(()),
            Self::Validating | Self::Submitting => Err(FlowError::InFlight),
            Self::Succeeded | Self::AlreadyApplied { .. } => Err(FlowError::AlreadyCompleted),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::AlreadyApplied { .. })
    }
}

/// Invalid transition attempted on the flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("A submission is already in progress")]
    InFlight,

    #[error("This application has already been submitted")]
    AlreadyCompleted,
}

/// Normalized result of one apply request. Both duplicate channels (a
/// payload-level code on a 2xx and an HTTP 409 with the same body) land on
/// `AlreadyApplied`, so the date formatting and messaging exist once.
#[derive(Clone, Debug, PartialEq)]
pub enum ApplyOutcome {
    Accepted,
    AlreadyApplied { applied_at: Option<DateTime<Utc>> },
    Rejected { message: String },
}

impl ApplyOutcome {
    pub fn from_response(response: ApplyResponse) -> Self {
        if response.is_success() {
            Self::Accepted
        } else if response.is_duplicate() {
            Self::AlreadyApplied {
                applied_at: response.applied_at,
            }
        } else {
            Self::Rejected {
                message: response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            }
        }
    }

    fn from_api_error(error: ApiError) -> Self {
        Self::Rejected {
            message: error
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }

    /// The toast message for this outcome.
    pub fn user_message(&self) -> String {
        match self {
            Self::Accepted => "Your application has been submitted!".to_string(),
            Self::AlreadyApplied {
                applied_at: Some(at),
            } => format!(
                "You have already applied to this campaign on {}",
                at.format("%Y-%m-%d")
            ),
            Self::AlreadyApplied { applied_at: None } => {
                "You have already applied to this campaign".to_string()
            }
            Self::Rejected { message } => message.clone(),
        }
    }

    /// Whether the submission UI closes on this outcome. Rejections keep
    /// the form open for correction.
    pub fn closes_form(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }
}

/// Result of one submit call.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitAttempt {
    /// Submission was intercepted; the agreement gate is now open and the
    /// owner should re-trigger submit after the gate reports agreement.
    AgreementRequired,
    Completed(ApplyOutcome),
}

/// Orchestrates validation, the agreement gate, payload assembly, and the
/// single network call for one form instance.
pub struct SubmissionFlow {
    api: Arc<dyn CampaignApi>,
    state: FlowState,
    gate: AgreementGate,
}

impl SubmissionFlow {
    pub fn new(api: Arc<dyn CampaignApi>) -> Self {
        Self {
            api,
            state: FlowState::Idle,
            gate: AgreementGate::new(),
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn gate(&self) -> &AgreementGate {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut AgreementGate {
        &mut self.gate
    }

    /// Called when the submission drawer reopens: acknowledgment is scoped
    /// to one attempt, and a prior rejection no longer applies.
    pub fn reopen(&mut self) {
        self.gate.reset();
        if matches!(self.state, FlowState::Failed { .. }) {
            self.state = FlowState::Idle;
        }
    }

    /// One submission attempt: validate, pass the agreement gate, assemble
    /// the payload, and make the single POST. No retry, no cancellation; a
    /// second explicit submit is a fresh attempt.
    pub async fn submit(
        &mut self,
        form: &AddressForm,
        draft: &ApplicationDraft,
    ) -> Result<SubmitAttempt> {
        self.state.ensure_can_begin()?;
        self.state = FlowState::Validating;

        if let Err(error) = validate(form, draft) {
            tracing::debug!(%error, "application validation failed");
            self.state = FlowState::Idle;
            return Err(error.into());
        }

        if !self.gate.acknowledged() {
            self.gate.open();
            self.state = FlowState::Idle;
            return Ok(SubmitAttempt::AgreementRequired);
        }

        let payload = match ApplicationPayload::assemble(form, draft) {
            Ok(payload) => payload,
            Err(error) => {
                self.state = FlowState::Idle;
                return Err(ApplyError::Validation(error));
            }
        };

        self.state = FlowState::Submitting;
        tracing::info!(campaign_id = %payload.campaign_id, "submitting campaign application");

        let outcome = match self.api.submit_application(&payload).await {
            Ok(response) => ApplyOutcome::from_response(response),
            Err(error) => {
                tracing::warn!(%error, "application submit request failed");
                ApplyOutcome::from_api_error(error)
            }
        };

        self.state = match &outcome {
            ApplyOutcome::Accepted => {
                tracing::info!(campaign_id = %payload.campaign_id, "application accepted");
                FlowState::Succeeded
            }
            ApplyOutcome::AlreadyApplied { applied_at } => {
                tracing::info!(campaign_id = %payload.campaign_id, "duplicate application");
                FlowState::AlreadyApplied {
                    applied_at: *applied_at,
                }
            }
            ApplyOutcome::Rejected { message } => FlowState::Failed {
                message: message.clone(),
            },
        };

        Ok(SubmitAttempt::Completed(outcome))
    }
}
