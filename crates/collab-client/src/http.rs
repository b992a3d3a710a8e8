//! HTTP adapter for the campaign API
//!
//! Implements the `CampaignApi` port with reqwest. Auth is bearer-style,
//! with the token pulled from the injected credential provider on every
//! request. Requests are one-shot: no retry loop, no idempotency keys —
//! every retry is a fresh user-initiated submit.

use crate::config::ClientConfig;
use async_trait::async_trait;
use collab_apply::{
    ApiError, AppliedStatus, ApplicationPayload, ApplyResponse, Campaign, CampaignApi,
    CredentialProvider,
};
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;
use url::Url;

/// Failed to construct the client itself (requests report `ApiError`).
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid header value: {0}")]
    Header(#[from] header::InvalidHeaderValue),

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// reqwest-backed implementation of the campaign API port.
pub struct HttpCampaignApi {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpCampaignApi {
    pub fn new(
        config: ClientConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, ClientError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)?,
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url,
            credentials,
        })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        join_url(&self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.credentials.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(self.http.get(self.url(path)?))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(|e| ApiError::Protocol(e.to_string()))
        } else {
            Err(decode_error(status.as_u16(), &bytes))
        }
    }
}

#[async_trait]
impl CampaignApi for HttpCampaignApi {
    async fn submit_application(
        &self,
        payload: &ApplicationPayload,
    ) -> Result<ApplyResponse, ApiError> {
        let url = self.url("user/campaigns/apply")?;
        tracing::debug!(campaign_id = %payload.campaign_id, "POST user/campaigns/apply");

        let response = self
            .authorize(self.http.post(url))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        decode_apply_response(status.as_u16(), &bytes)
    }

    async fn get_campaign(&self, campaign_id: &str) -> Result<Campaign, ApiError> {
        self.get_json(&format!("campaigns/{campaign_id}")).await
    }

    async fn applied_status(&self, campaign_id: &str) -> Result<AppliedStatus, ApiError> {
        self.get_json(&format!("user/campaigns/{campaign_id}/applied"))
            .await
    }
}

/// Join an endpoint path onto the base URL. A base without a trailing slash
/// would make `Url::join` drop its last path segment, so one is appended
/// first.
fn join_url(base: &str, path: &str) -> Result<Url, ApiError> {
    let base = if base.ends_with('/') {
        Url::parse(base)
    } else {
        Url::parse(&format!("{base}/"))
    }
    .map_err(|e| ApiError::Protocol(e.to_string()))?;

    base.join(path).map_err(|e| ApiError::Protocol(e.to_string()))
}

/// Decode the apply endpoint's response. A 409 carrying a duplicate body is
/// surfaced as a normal `ApplyResponse` so the flow normalizes both
/// duplicate channels through one path.
fn decode_apply_response(status: u16, bytes: &[u8]) -> Result<ApplyResponse, ApiError> {
    if StatusCode::from_u16(status)
        .map(|s| s.is_success())
        .unwrap_or(false)
    {
        return serde_json::from_slice(bytes).map_err(|e| ApiError::Protocol(e.to_string()));
    }

    if status == StatusCode::CONFLICT.as_u16() {
        if let Ok(response) = serde_json::from_slice::<ApplyResponse>(bytes) {
            if response.is_duplicate() {
                return Ok(response);
            }
        }
    }

    if status == StatusCode::UNAUTHORIZED.as_u16() {
        return Err(ApiError::Unauthorized);
    }

    Err(decode_error(status, bytes))
}

fn decode_error(status: u16, bytes: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<serde_json::Value>(bytes)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .or_else(|| value.get("error").and_then(|e| e.get("message")))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_default();

    ApiError::Status { status, message }
}
