//! Field descriptors and country codes
//!
//! The static metadata describing one address input: name, label,
//! requiredness, and either a free-text kind with an optional full-match
//! pattern or a select kind with a fixed option list.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata for one address form input.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    /// Wire name, unique within its schema (e.g. `addressLine1`).
    pub name: &'static str,
    /// Human-readable label shown next to the input.
    pub label: &'static str,
    /// Whether the rendered input carries the required marker.
    pub required: bool,
    /// Placeholder / sample value. For patterned fields the sample must
    /// match the pattern.
    pub placeholder: &'static str,
    /// Input kind.
    pub kind: FieldKind,
}

/// Input kind for a field.
#[derive(Clone, Debug)]
pub enum FieldKind {
    /// Free text, optionally validated against a full-string pattern.
    Text { pattern: Option<Regex> },
    /// Dropdown with a non-empty option list, rendered with a leading
    /// blank "select a value" entry.
    Select { options: &'static [&'static str] },
}

impl FieldDescriptor {
    /// Whether `value` fails this field's live validation. A field is only
    /// invalid when its value is non-empty and does not fully match the
    /// pattern; required-but-empty is enforced at submission time, not here.
    pub fn is_invalid(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        match &self.kind {
            FieldKind::Text { pattern: Some(re) } => !re.is_match(value),
            FieldKind::Text { pattern: None } => false,
            FieldKind::Select { options } => !options.contains(&value),
        }
    }

    pub fn pattern(&self) -> Option<&Regex> {
        match &self.kind {
            FieldKind::Text { pattern } => pattern.as_ref(),
            FieldKind::Select { .. } => None,
        }
    }
}

/// ISO 3166-1 alpha-2 country codes with explicit schema support.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    US,
    CA,
    GB,
    JP,
    KR,
    AU,
    DE,
    FR,
    IN,
    BR,
    CN,
    Other(String),
}

impl CountryCode {
    pub fn code(&self) -> &str {
        match self {
            Self::US => "US",
            Self::CA => "CA",
            Self::GB => "GB",
            Self::JP => "JP",
            Self::KR => "KR",
            Self::AU => "AU",
            Self::DE => "DE",
            Self::FR => "FR",
            Self::IN => "IN",
            Self::BR => "BR",
            Self::CN => "CN",
            Self::Other(c) => c,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::US => "United States",
            Self::CA => "Canada",
            Self::GB => "United Kingdom",
            Self::JP => "Japan",
            Self::KR => "South Korea",
            Self::AU => "Australia",
            Self::DE => "Germany",
            Self::FR => "France",
            Self::IN => "India",
            Self::BR => "Brazil",
            Self::CN => "China",
            Self::Other(c) => c,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.to_uppercase().as_str() {
            "US" => Self::US,
            "CA" => Self::CA,
            "GB" => Self::GB,
            "JP" => Self::JP,
            "KR" => Self::KR,
            "AU" => Self::AU,
            "DE" => Self::DE,
            "FR" => Self::FR,
            "IN" => Self::IN,
            "BR" => Self::BR,
            "CN" => Self::CN,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
