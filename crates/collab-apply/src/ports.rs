//! Outbound ports
//!
//! Hexagonal architecture: these are the interfaces the HTTP adapter
//! implements. The flow never sees reqwest types.

use crate::campaign::Campaign;
use crate::payload::ApplicationPayload;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Response codes the backend uses to flag a duplicate application.
pub const DUPLICATE_CODES: &[&str] =
    &["DUPLICATE_APPLICATION", "DUPLICATE_APPLICATION_BY_USER_ID"];

/// Wire response from the apply endpoint. A duplicate can arrive either as
/// a payload-level non-success status on a 2xx, or inside a 409 body; the
/// adapter surfaces both through this one shape.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyResponse {
    pub status: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
}

impl ApplyResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    pub fn is_duplicate(&self) -> bool {
        self.code
            .as_deref()
            .map(|code| DUPLICATE_CODES.contains(&code))
            .unwrap_or(false)
    }
}

/// Whether the current user already applied to a campaign.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedStatus {
    pub applied: bool,
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
}

/// API error type for the outbound port.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Not authenticated")]
    Unauthorized,

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Protocol(String),

    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Server-provided message, when one exists and is worth surfacing.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Campaign API port.
#[async_trait]
pub trait CampaignApi: Send + Sync {
    /// Submit one campaign application. One-shot: no retry, no
    /// cancellation; a second explicit submit is a fresh attempt.
    async fn submit_application(
        &self,
        payload: &ApplicationPayload,
    ) -> Result<ApplyResponse, ApiError>;

    /// Fetch a campaign by id.
    async fn get_campaign(&self, campaign_id: &str) -> Result<Campaign, ApiError>;

    /// Whether the current user already applied to the campaign.
    async fn applied_status(&self, campaign_id: &str) -> Result<AppliedStatus, ApiError>;
}

/// Credential source for authenticated calls. Injected rather than read
/// from ambient storage so the flow is testable without a browser-like
/// environment.
pub trait CredentialProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Fixed-token credentials for tests and embedding hosts.
#[derive(Clone, Debug, Default)]
pub struct StaticCredentials {
    token: Option<String>,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

impl CredentialProvider for StaticCredentials {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_detection_by_code() {
        let response: ApplyResponse = serde_json::from_str(
            r#"{"status":"failed","code":"DUPLICATE_APPLICATION","appliedAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(!response.is_success());
        assert!(response.is_duplicate());
        assert!(response.applied_at.is_some());
    }

    #[test]
    fn test_duplicate_by_user_id_code() {
        let response = ApplyResponse {
            status: "failed".into(),
            code: Some("DUPLICATE_APPLICATION_BY_USER_ID".into()),
            ..Default::default()
        };
        assert!(response.is_duplicate());
    }

    #[test]
    fn test_unrelated_code_is_not_duplicate() {
        let response = ApplyResponse {
            status: "failed".into(),
            code: Some("CAMPAIGN_CLOSED".into()),
            ..Default::default()
        };
        assert!(!response.is_duplicate());
    }

    #[test]
    fn test_static_credentials() {
        assert_eq!(StaticCredentials::anonymous().token(), None);
        assert_eq!(
            StaticCredentials::new("tok").token(),
            Some("tok".to_string())
        );
    }
}
