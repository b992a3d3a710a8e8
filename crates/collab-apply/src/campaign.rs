//! Campaign and applicant types
//!
//! Campaigns are owned by the backend; this is the read-side shape the
//! application flow needs (declared content formats and pricing bounds).

use serde::{Deserialize, Serialize};

/// Default bid bounds when the campaign does not specify them.
pub const DEFAULT_MIN_BID: f64 = 1.0;
pub const DEFAULT_MAX_BID: f64 = 10000.0;

/// Content format a campaign asks creators to produce.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentFormat {
    Instagram,
    TikTok,
    YouTube,
    Other(String),
}

impl From<String> for ContentFormat {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "instagram" => Self::Instagram,
            "tiktok" => Self::TikTok,
            "youtube" => Self::YouTube,
            _ => Self::Other(value),
        }
    }
}

impl From<ContentFormat> for String {
    fn from(format: ContentFormat) -> Self {
        match format {
            ContentFormat::Instagram => "Instagram".to_string(),
            ContentFormat::TikTok => "TikTok".to_string(),
            ContentFormat::YouTube => "YouTube".to_string(),
            ContentFormat::Other(s) => s,
        }
    }
}

/// How the campaign prices creator work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingModel {
    /// Brand-set fixed rate.
    #[default]
    Fixed,
    /// Creator proposes a price within brand-set bounds.
    Bidding,
}

/// A brand campaign, as returned by the backend.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content_formats: Vec<ContentFormat>,
    #[serde(default)]
    pub pricing_model: PricingModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_bid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bid: Option<f64>,
}

impl Campaign {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content_formats: Vec::new(),
            pricing_model: PricingModel::Fixed,
            min_bid: None,
            max_bid: None,
        }
    }

    pub fn requires(&self, format: &ContentFormat) -> bool {
        self.content_formats.contains(format)
    }

    pub fn is_bidding(&self) -> bool {
        self.pricing_model == PricingModel::Bidding
    }

    /// Inclusive bid bounds, with platform defaults where the campaign is
    /// silent.
    pub fn bid_bounds(&self) -> (f64, f64) {
        (
            self.min_bid.unwrap_or(DEFAULT_MIN_BID),
            self.max_bid.unwrap_or(DEFAULT_MAX_BID),
        )
    }
}

/// The applying creator's profile fields. Name and email are read-only in
/// the form; they come from the signed-in account.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl ApplicantProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_format_parsing() {
        assert_eq!(ContentFormat::from("TikTok".to_string()), ContentFormat::TikTok);
        assert_eq!(ContentFormat::from("instagram".to_string()), ContentFormat::Instagram);
        assert_eq!(
            ContentFormat::from("Podcast".to_string()),
            ContentFormat::Other("Podcast".to_string())
        );
    }

    #[test]
    fn test_campaign_deserializes_from_wire_shape() {
        let campaign: Campaign = serde_json::from_str(
            r#"{
                "id": "cmp-1",
                "title": "Summer Launch",
                "contentFormats": ["Instagram", "TikTok"],
                "pricingModel": "bidding",
                "minBid": 5,
                "maxBid": 50
            }"#,
        )
        .unwrap();

        assert!(campaign.requires(&ContentFormat::Instagram));
        assert!(campaign.is_bidding());
        assert_eq!(campaign.bid_bounds(), (5.0, 50.0));
    }

    #[test]
    fn test_bid_bounds_default() {
        let campaign = Campaign::new("cmp-1", "Fixed Rate");
        assert_eq!(campaign.bid_bounds(), (DEFAULT_MIN_BID, DEFAULT_MAX_BID));
    }
}
