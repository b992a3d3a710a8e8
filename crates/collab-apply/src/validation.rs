//! Submission validation
//!
//! Ordered checks with first-failure-wins semantics. Each failure carries
//! the user-facing message; the form stays open and populated.

use crate::campaign::ContentFormat;
use crate::draft::ApplicationDraft;
use crate::resolve;
use collab_forms::AddressForm;
use thiserror::Error;

/// A local validation failure, caught before any network call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please select your country")]
    MissingCountry,

    #[error("Please fill in your {0}")]
    RequiredField(String),

    #[error("Please enter a valid {0}")]
    InvalidField(String),

    #[error("Please enter your address and city")]
    MissingBasicAddress,

    #[error("Please enter your Instagram ID")]
    MissingInstagramId,

    #[error("Please enter your TikTok ID")]
    MissingTikTokId,

    #[error("Please enter your TikTok ID, not a link")]
    TikTokIdNotAHandle,

    #[error("Please enter a bid between ${min} and ${max}")]
    BidOutOfBounds { min: f64, max: f64 },
}

/// Normalize a TikTok handle the way the input field does as the user
/// types: trim and prefix a single `@` when missing. Does not repair
/// malformed values; those still fail validation.
pub fn normalize_tiktok_id(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.starts_with('@') {
        trimmed.to_string()
    } else {
        format!("@{trimmed}")
    }
}

fn tiktok_id_is_malformed(raw: &str) -> bool {
    let lower = raw.to_lowercase();
    lower.contains("tiktok.com")
        || lower.contains("http://")
        || lower.contains("https://")
        || raw.chars().any(char::is_whitespace)
        || raw.starts_with("@@")
}

/// Validate a submission attempt. Checks run in order and the first
/// failure wins:
///
/// 1. a country is selected;
/// 2. the form's own required fields are filled (the form surface blocks
///    submission on any empty required input);
/// 3. non-empty values match their field patterns (the form surface again);
/// 4. the basic address check: primary line and city non-empty after
///    trimming (intentionally looser than the per-field flags — kept
///    country-independent, the backend re-validates);
/// 5. Instagram handle, when the campaign asks for Instagram content;
/// 6. TikTok handle shape, when the campaign asks for TikTok content;
/// 7. bid presence and bounds, for bidding campaigns.
pub fn validate(form: &AddressForm, draft: &ApplicationDraft) -> Result<(), ValidationError> {
    if form.country().is_none() {
        return Err(ValidationError::MissingCountry);
    }

    if let Some(field) = form.first_missing_required() {
        return Err(ValidationError::RequiredField(field.label.to_string()));
    }

    if let Some(field) = form.first_invalid() {
        return Err(ValidationError::InvalidField(field.label.to_string()));
    }

    // Every schema currently marks line 1 and city required, so the
    // required pass fires first; this is the country-independent backstop.
    if resolve::primary_line(form).is_none() || form.trimmed("city").is_none() {
        return Err(ValidationError::MissingBasicAddress);
    }

    let campaign = &draft.campaign;

    if campaign.requires(&ContentFormat::Instagram) && draft.instagram_id().is_none() {
        return Err(ValidationError::MissingInstagramId);
    }

    if campaign.requires(&ContentFormat::TikTok) {
        match draft.tiktok_id() {
            None => return Err(ValidationError::MissingTikTokId),
            Some(raw) if tiktok_id_is_malformed(raw) => {
                return Err(ValidationError::TikTokIdNotAHandle)
            }
            Some(_) => {}
        }
    }

    if campaign.is_bidding() {
        let (min, max) = campaign.bid_bounds();
        let bid = draft
            .bid()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|bid| (min..=max).contains(bid));
        if bid.is_none() {
            return Err(ValidationError::BidOutOfBounds { min, max });
        }
    }

    Ok(())
}
