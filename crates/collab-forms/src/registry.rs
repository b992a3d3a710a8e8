//! Country address schema registry
//!
//! Static mapping from country code to an ordered list of field
//! descriptors. Lookup is total: countries without an explicit schema get
//! the generic fallback (address lines, city, state/province, postal code).
//!
//! Patterns are anchored for full-string matching and every patterned field
//! carries a placeholder that matches its own pattern.

use crate::descriptor::{CountryCode, FieldDescriptor, FieldKind};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Ordered field list for one country.
#[derive(Clone, Debug)]
pub struct CountrySchema {
    fields: Vec<FieldDescriptor>,
}

impl CountrySchema {
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

struct Registry {
    by_code: HashMap<&'static str, CountrySchema>,
    fallback: CountrySchema,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Look up the address schema for a country. Never fails: unsupported
/// countries resolve to the generic fallback schema.
pub fn lookup(country: &CountryCode) -> &'static CountrySchema {
    let registry = REGISTRY.get_or_init(Registry::build);
    match registry.by_code.get(country.code()) {
        Some(schema) => schema,
        None => {
            tracing::debug!(country = %country, "no address schema, using fallback");
            &registry.fallback
        }
    }
}

/// Country codes with an explicit (non-fallback) schema.
pub fn supported_codes() -> Vec<CountryCode> {
    let registry = REGISTRY.get_or_init(Registry::build);
    registry
        .by_code
        .keys()
        .map(|code| CountryCode::from_code(code))
        .collect()
}

fn text(
    name: &'static str,
    label: &'static str,
    required: bool,
    placeholder: &'static str,
) -> FieldDescriptor {
    FieldDescriptor {
        name,
        label,
        required,
        placeholder,
        kind: FieldKind::Text { pattern: None },
    }
}

fn patterned(
    name: &'static str,
    label: &'static str,
    required: bool,
    placeholder: &'static str,
    pattern: &str,
) -> FieldDescriptor {
    let re = Regex::new(pattern).expect("invalid schema pattern");
    FieldDescriptor {
        name,
        label,
        required,
        placeholder,
        kind: FieldKind::Text { pattern: Some(re) },
    }
}

fn select(
    name: &'static str,
    label: &'static str,
    required: bool,
    placeholder: &'static str,
    options: &'static [&'static str],
) -> FieldDescriptor {
    assert!(!options.is_empty(), "select field needs options");
    FieldDescriptor {
        name,
        label,
        required,
        placeholder,
        kind: FieldKind::Select { options },
    }
}

const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID",
    "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS",
    "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK",
    "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV",
    "WI", "WY", "DC",
];

const CA_PROVINCES: &[&str] = &[
    "AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU", "ON", "PE", "QC", "SK",
    "YT",
];

const AU_STATES: &[&str] = &["NSW", "VIC", "QLD", "WA", "SA", "TAS", "ACT", "NT"];

const JP_PREFECTURES: &[&str] = &[
    "Hokkaido", "Aomori", "Iwate", "Miyagi", "Akita", "Yamagata", "Fukushima",
    "Ibaraki", "Tochigi", "Gunma", "Saitama", "Chiba", "Tokyo", "Kanagawa",
    "Niigata", "Toyama", "Ishikawa", "Fukui", "Yamanashi", "Nagano", "Gifu",
    "Shizuoka", "Aichi", "Mie", "Shiga", "Kyoto", "Osaka", "Hyogo", "Nara",
    "Wakayama", "Tottori", "Shimane", "Okayama", "Hiroshima", "Yamaguchi",
    "Tokushima", "Kagawa", "Ehime", "Kochi", "Fukuoka", "Saga", "Nagasaki",
    "Kumamoto", "Oita", "Miyazaki", "Kagoshima", "Okinawa",
];

impl Registry {
    fn build() -> Self {
        let mut by_code: HashMap<&'static str, CountrySchema> = HashMap::new();

        by_code.insert(
            "US",
            CountrySchema {
                fields: vec![
                    text("addressLine1", "Street Address", true, "123 Main St"),
                    text("addressLine2", "Apt, Suite, Building", false, "Apt 4B"),
                    text("unit", "Unit", false, "Unit 2"),
                    text("city", "City", true, "Springfield"),
                    select("state", "State", true, "Select a state", US_STATES),
                    patterned("zipCode", "ZIP Code", true, "12345", r"^\d{5}(-\d{4})?$"),
                ],
            },
        );

        by_code.insert(
            "CA",
            CountrySchema {
                fields: vec![
                    text("addressLine1", "Street Address", true, "123 Main St"),
                    text("addressLine2", "Apt, Suite, Building", false, "Suite 100"),
                    text("unit", "Unit", false, "Unit 2"),
                    text("city", "City", true, "Toronto"),
                    select("province", "Province", true, "Select a province", CA_PROVINCES),
                    patterned(
                        "postalCode",
                        "Postal Code",
                        true,
                        "A1A 1A1",
                        r"^[A-Za-z]\d[A-Za-z] ?\d[A-Za-z]\d$",
                    ),
                ],
            },
        );

        by_code.insert(
            "GB",
            CountrySchema {
                fields: vec![
                    text("addressLine1", "Address Line 1", true, "10 Downing Street"),
                    text("addressLine2", "Address Line 2", false, "Flat 2"),
                    text("city", "Town / City", true, "London"),
                    patterned(
                        "postcode",
                        "Postcode",
                        true,
                        "SW1A 1AA",
                        r"^[A-Za-z]{1,2}\d[A-Za-z\d]? ?\d[A-Za-z]{2}$",
                    ),
                ],
            },
        );

        // Japanese addresses are written large-to-small: postal code and
        // prefecture come before the street lines.
        by_code.insert(
            "JP",
            CountrySchema {
                fields: vec![
                    patterned("zipCode", "Postal Code", true, "123-4567", r"^\d{3}-?\d{4}$"),
                    select(
                        "prefecture",
                        "Prefecture",
                        true,
                        "Select a prefecture",
                        JP_PREFECTURES,
                    ),
                    text("city", "City / Ward", true, "Shibuya-ku"),
                    text("addressLine1", "Street Address", true, "1-2-3 Jinnan"),
                    text("addressLine2", "Building, Room", false, "Collab Bldg 4F"),
                ],
            },
        );

        by_code.insert(
            "KR",
            CountrySchema {
                fields: vec![
                    patterned("postalCode", "Postal Code", true, "03187", r"^\d{5}$"),
                    text("city", "City / Province", true, "Seoul"),
                    text("district", "District (Gu)", true, "Jongno-gu"),
                    text("addressLine1", "Street Address", true, "161 Sajik-ro"),
                    text("addressLine2", "Detail Address", false, "3rd floor"),
                ],
            },
        );

        by_code.insert(
            "AU",
            CountrySchema {
                fields: vec![
                    text("addressLine1", "Street Address", true, "1 Macquarie St"),
                    text("addressLine2", "Apt, Suite, Building", false, "Level 3"),
                    text("unit", "Unit", false, "Unit 12"),
                    text("city", "Suburb / City", true, "Sydney"),
                    select("state", "State / Territory", true, "Select a state", AU_STATES),
                    patterned("postcode", "Postcode", true, "2000", r"^\d{4}$"),
                ],
            },
        );

        by_code.insert(
            "DE",
            CountrySchema {
                fields: vec![
                    text("addressLine1", "Street and Number", true, "Unter den Linden 1"),
                    text("addressLine2", "Address Supplement", false, "Hinterhaus"),
                    patterned("postalCode", "Postal Code", true, "10115", r"^\d{5}$"),
                    text("city", "City", true, "Berlin"),
                ],
            },
        );

        by_code.insert(
            "FR",
            CountrySchema {
                fields: vec![
                    text("addressLine1", "Street Address", true, "1 Rue de Rivoli"),
                    text("addressLine2", "Address Line 2", false, "Bâtiment B"),
                    patterned("postalCode", "Postal Code", true, "75001", r"^\d{5}$"),
                    text("city", "City", true, "Paris"),
                ],
            },
        );

        by_code.insert(
            "IN",
            CountrySchema {
                fields: vec![
                    text("addressLine1", "Street Address", true, "12 MG Road"),
                    text("addressLine2", "Area, Landmark", false, "Near City Park"),
                    text("city", "City", true, "New Delhi"),
                    text("state", "State", true, "Delhi"),
                    patterned("postalCode", "PIN Code", true, "110001", r"^[1-9]\d{5}$"),
                ],
            },
        );

        by_code.insert(
            "BR",
            CountrySchema {
                fields: vec![
                    text("addressLine1", "Street Address", true, "Av. Paulista 1000"),
                    text("addressLine2", "Complement", false, "Conjunto 21"),
                    text("city", "City", true, "São Paulo"),
                    text("state", "State", true, "SP"),
                    patterned("postalCode", "CEP", true, "01310-100", r"^\d{5}-?\d{3}$"),
                ],
            },
        );

        by_code.insert(
            "CN",
            CountrySchema {
                fields: vec![
                    text("province", "Province", true, "Beijing"),
                    text("city", "City", true, "Beijing"),
                    text("addressLine1", "Street Address", true, "1 Chang'an Ave"),
                    text("addressLine2", "Building, Room", false, "Tower A, Room 501"),
                    patterned("postalCode", "Postal Code", true, "100000", r"^\d{6}$"),
                ],
            },
        );

        // Generic schema: only the primary line and city are required.
        let fallback = CountrySchema {
            fields: vec![
                text("addressLine1", "Address Line 1", true, "123 Main St"),
                text("addressLine2", "Address Line 2", false, "Apt 4B"),
                text("city", "City", true, "Springfield"),
                text("state", "State / Province", false, "State"),
                text("postalCode", "Postal Code", false, "12345"),
            ],
        };

        Self { by_code, fallback }
    }
}
