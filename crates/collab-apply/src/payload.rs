//! Application payload assembly
//!
//! The write-once wire shape POSTed to `/user/campaigns/apply`. Assembled
//! from the address form plus campaign fields after validation passes, and
//! discarded once the request completes.

use crate::campaign::ContentFormat;
use crate::draft::ApplicationDraft;
use crate::resolve;
use crate::validation::ValidationError;
use collab_forms::AddressForm;
use serde::{Deserialize, Serialize};

/// Structured, machine-readable address: the authoritative form sent
/// alongside the flattened display string.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternationalAddress {
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefecture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

impl InternationalAddress {
    fn from_form(country: &str, form: &AddressForm) -> Self {
        let get = |name: &str| form.trimmed(name).map(str::to_string);
        Self {
            country: country.to_string(),
            address_line1: get("addressLine1"),
            address_line2: get("addressLine2"),
            unit: get("unit"),
            city: get("city"),
            state: get("state"),
            province: get("province"),
            prefecture: get("prefecture"),
            district: get("district"),
            zip_code: get("zipCode"),
            postal_code: get("postalCode"),
            postcode: get("postcode"),
        }
    }
}

/// The POST body for a campaign application.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    pub country: String,
    pub state: String,
    pub city: String,
    pub phone: String,
    pub address: String,
    pub unit: String,
    pub zip: String,
    pub international_address: InternationalAddress,
    pub campaign_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiktok_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid: Option<f64>,
}

impl ApplicationPayload {
    /// Assemble the payload from a validated form and draft. Only fields
    /// the campaign asked for are carried; the flattened `address` string
    /// is for human-readable display.
    pub fn assemble(
        form: &AddressForm,
        draft: &ApplicationDraft,
    ) -> Result<Self, ValidationError> {
        let country = form.country().ok_or(ValidationError::MissingCountry)?;
        let campaign = &draft.campaign;

        let own = |v: Option<&str>| v.unwrap_or("").to_string();

        Ok(Self {
            country: country.code().to_string(),
            state: own(resolve::region(form)),
            city: own(form.trimmed("city")),
            phone: draft.profile.phone.clone().unwrap_or_default(),
            address: resolve::assemble_display_address(form),
            unit: own(form.trimmed("unit")),
            zip: own(resolve::postal_code(form)),
            international_address: InternationalAddress::from_form(country.code(), form),
            campaign_id: campaign.id.clone(),
            instagram_id: campaign
                .requires(&ContentFormat::Instagram)
                .then(|| draft.instagram_id().map(str::to_string))
                .flatten(),
            tiktok_id: campaign
                .requires(&ContentFormat::TikTok)
                .then(|| draft.tiktok_id().map(str::to_string))
                .flatten(),
            bid: campaign
                .is_bidding()
                .then(|| draft.bid().and_then(|raw| raw.trim().parse().ok()))
                .flatten(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::{ApplicantProfile, Campaign, PricingModel};
    use collab_forms::CountryCode;

    fn jp_form() -> AddressForm {
        let mut form = AddressForm::new();
        form.set_country(CountryCode::JP);
        form.set_field("zipCode", "123-4567").unwrap();
        form.set_field("prefecture", "Tokyo").unwrap();
        form.set_field("city", "Shibuya-ku").unwrap();
        form.set_field("addressLine1", "1-2-3 Jinnan").unwrap();
        form
    }

    #[test]
    fn test_assemble_maps_resolved_aliases() {
        let mut campaign = Campaign::new("cmp-1", "Launch");
        campaign.pricing_model = PricingModel::Bidding;
        let mut draft =
            ApplicationDraft::new(campaign, ApplicantProfile::new("Ada", "ada@example.com"));
        draft.set_bid("25");

        let payload = ApplicationPayload::assemble(&jp_form(), &draft).unwrap();
        assert_eq!(payload.country, "JP");
        assert_eq!(payload.state, "Tokyo");
        assert_eq!(payload.zip, "123-4567");
        assert_eq!(payload.campaign_id, "cmp-1");
        assert_eq!(payload.bid, Some(25.0));
        assert_eq!(
            payload.address,
            "1-2-3 Jinnan, Shibuya-ku, Tokyo, 123-4567"
        );
        assert_eq!(
            payload.international_address.prefecture.as_deref(),
            Some("Tokyo")
        );
    }

    #[test]
    fn test_assemble_omits_handles_campaign_did_not_ask_for() {
        let mut draft = ApplicationDraft::new(
            Campaign::new("cmp-1", "Launch"),
            ApplicantProfile::new("Ada", "ada@example.com"),
        );
        draft.set_instagram_id("ada.creates");
        draft.set_tiktok_id("someone");
        draft.set_bid("25");

        let payload = ApplicationPayload::assemble(&jp_form(), &draft).unwrap();
        assert_eq!(payload.instagram_id, None);
        assert_eq!(payload.tiktok_id, None);
        assert_eq!(payload.bid, None);
    }

    #[test]
    fn test_wire_shape_uses_camel_case() {
        let draft = ApplicationDraft::new(
            Campaign::new("cmp-1", "Launch"),
            ApplicantProfile::new("Ada", "ada@example.com"),
        );
        let payload = ApplicationPayload::assemble(&jp_form(), &draft).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("campaignId").is_some());
        assert!(json.get("internationalAddress").is_some());
        assert_eq!(
            json["internationalAddress"]["zipCode"],
            serde_json::json!("123-4567")
        );
    }

    #[test]
    fn test_assemble_without_country_fails() {
        let draft = ApplicationDraft::new(
            Campaign::new("cmp-1", "Launch"),
            ApplicantProfile::new("Ada", "ada@example.com"),
        );
        let form = AddressForm::new();
        assert_eq!(
            ApplicationPayload::assemble(&form, &draft).unwrap_err(),
            ValidationError::MissingCountry
        );
    }
}
