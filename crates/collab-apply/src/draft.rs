//! Application draft
//!
//! The mutable, per-attempt input the creator fills in alongside the
//! address form: social handles and, for bidding campaigns, a proposed
//! price. Discarded after each submission cycle.

use crate::campaign::{ApplicantProfile, Campaign};
use crate::validation::normalize_tiktok_id;

#[derive(Clone, Debug)]
pub struct ApplicationDraft {
    pub campaign: Campaign,
    pub profile: ApplicantProfile,
    instagram_id: Option<String>,
    tiktok_id: Option<String>,
    bid: Option<String>,
}

impl ApplicationDraft {
    pub fn new(campaign: Campaign, profile: ApplicantProfile) -> Self {
        Self {
            campaign,
            profile,
            instagram_id: None,
            tiktok_id: None,
            bid: None,
        }
    }

    pub fn set_instagram_id(&mut self, input: &str) {
        let trimmed = input.trim();
        self.instagram_id = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    pub fn instagram_id(&self) -> Option<&str> {
        self.instagram_id.as_deref()
    }

    /// Store a TikTok handle, auto-prefixing a single `@` the way the input
    /// does as the user types. Validation re-checks the stored value at
    /// submission time independent of this normalization.
    pub fn set_tiktok_id(&mut self, input: &str) {
        let normalized = normalize_tiktok_id(input);
        self.tiktok_id = (!normalized.is_empty()).then_some(normalized);
    }

    pub fn tiktok_id(&self) -> Option<&str> {
        self.tiktok_id.as_deref()
    }

    /// Raw bid input as typed; parsed and range-checked at validation time.
    pub fn set_bid(&mut self, input: &str) {
        let trimmed = input.trim();
        self.bid = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    pub fn bid(&self) -> Option<&str> {
        self.bid.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ApplicationDraft {
        ApplicationDraft::new(
            Campaign::new("cmp-1", "Launch"),
            ApplicantProfile::new("Ada", "ada@example.com"),
        )
    }

    #[test]
    fn test_tiktok_handle_gets_prefixed() {
        let mut d = draft();
        d.set_tiktok_id("someone");
        assert_eq!(d.tiktok_id(), Some("@someone"));

        d.set_tiktok_id("@already");
        assert_eq!(d.tiktok_id(), Some("@already"));
    }

    #[test]
    fn test_blank_inputs_clear_fields() {
        let mut d = draft();
        d.set_instagram_id("handle");
        d.set_instagram_id("   ");
        assert_eq!(d.instagram_id(), None);

        d.set_bid("25");
        d.set_bid("");
        assert_eq!(d.bid(), None);
    }
}
