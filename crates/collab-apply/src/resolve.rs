//! Alias resolution and display-address assembly
//!
//! Several address concepts go by different field names depending on the
//! country schema and on legacy payloads (address line 1 vs `street`, state
//! vs province vs prefecture, zip vs postal code vs postcode). Precedence is
//! a named contract here rather than ad hoc chained fallbacks.

use collab_forms::AddressForm;

/// Candidates for the primary street line, in precedence order.
pub const PRIMARY_LINE_ALIASES: &[&str] = &["addressLine1", "street"];

/// Candidates for the region, in precedence order.
pub const REGION_ALIASES: &[&str] = &["state", "province", "prefecture"];

/// Candidates for the postal code, in precedence order.
pub const POSTAL_ALIASES: &[&str] = &["zipCode", "postalCode", "postcode"];

/// First candidate that is non-empty after trimming.
pub fn first_non_empty<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
}

/// Resolve an aliased concept against the form's values.
pub fn resolve_alias<'a>(form: &'a AddressForm, aliases: &[&str]) -> Option<&'a str> {
    first_non_empty(aliases.iter().map(|name| form.trimmed(name)))
}

pub fn primary_line(form: &AddressForm) -> Option<&str> {
    resolve_alias(form, PRIMARY_LINE_ALIASES)
}

pub fn region(form: &AddressForm) -> Option<&str> {
    resolve_alias(form, REGION_ALIASES)
}

pub fn postal_code(form: &AddressForm) -> Option<&str> {
    resolve_alias(form, POSTAL_ALIASES)
}

/// Assemble the human-readable address line. Order-sensitive; the structured
/// address object is the authoritative form sent alongside this string.
///
/// The secondary line is included only when it differs from both the unit
/// value and the primary line, so duplicated entries collapse.
pub fn assemble_display_address(form: &AddressForm) -> String {
    let primary = primary_line(form);
    let secondary = form.trimmed("addressLine2");
    let unit = form.trimmed("unit");

    let mut parts: Vec<&str> = Vec::new();
    if let Some(p) = primary {
        parts.push(p);
    }
    if let Some(s) = secondary {
        if Some(s) != unit && Some(s) != primary {
            parts.push(s);
        }
    }
    if let Some(u) = unit {
        parts.push(u);
    }
    if let Some(city) = form.trimmed("city") {
        parts.push(city);
    }
    if let Some(r) = region(form) {
        parts.push(r);
    }
    if let Some(p) = postal_code(form) {
        parts.push(p);
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use collab_forms::CountryCode;

    fn us_form() -> AddressForm {
        let mut form = AddressForm::new();
        form.set_country(CountryCode::US);
        form
    }

    #[test]
    fn test_first_non_empty_precedence() {
        assert_eq!(first_non_empty([None, Some("second")]), Some("second"));
        assert_eq!(first_non_empty([Some("first"), Some("second")]), Some("first"));
        assert_eq!(first_non_empty([Some("  "), Some("second")]), Some("second"));
        assert_eq!(first_non_empty::<[Option<&str>; 2]>([None, None]), None);
    }

    #[test]
    fn test_region_resolves_prefecture() {
        let mut form = AddressForm::new();
        form.set_country(CountryCode::JP);
        form.set_field("prefecture", "Tokyo").unwrap();
        assert_eq!(region(&form), Some("Tokyo"));
    }

    #[test]
    fn test_postal_resolves_in_order() {
        let mut form = us_form();
        form.set_field("zipCode", "12345").unwrap();
        assert_eq!(postal_code(&form), Some("12345"));

        let mut gb = AddressForm::new();
        gb.set_country(CountryCode::GB);
        gb.set_field("postcode", "SW1A 1AA").unwrap();
        assert_eq!(postal_code(&gb), Some("SW1A 1AA"));
    }

    #[test]
    fn test_display_address_deduplicates_secondary_line() {
        let mut form = us_form();
        form.set_field("addressLine1", "123 Main St").unwrap();
        form.set_field("addressLine2", "123 Main St").unwrap();
        form.set_field("city", "Springfield").unwrap();
        assert_eq!(assemble_display_address(&form), "123 Main St, Springfield");
    }

    #[test]
    fn test_display_address_skips_secondary_equal_to_unit() {
        let mut form = us_form();
        form.set_field("addressLine1", "123 Main St").unwrap();
        form.set_field("addressLine2", "Unit 2").unwrap();
        form.set_field("unit", "Unit 2").unwrap();
        form.set_field("city", "Springfield").unwrap();
        assert_eq!(
            assemble_display_address(&form),
            "123 Main St, Unit 2, Springfield"
        );
    }

    #[test]
    fn test_display_address_full_ordering() {
        let mut form = us_form();
        form.set_field("addressLine1", "123 Main St").unwrap();
        form.set_field("addressLine2", "Floor 3").unwrap();
        form.set_field("unit", "Unit 2").unwrap();
        form.set_field("city", "Springfield").unwrap();
        form.set_field("state", "IL").unwrap();
        form.set_field("zipCode", "62704").unwrap();
        assert_eq!(
            assemble_display_address(&form),
            "123 Main St, Floor 3, Unit 2, Springfield, IL, 62704"
        );
    }
}
