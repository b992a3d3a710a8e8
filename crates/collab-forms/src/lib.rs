//! OpenCollab address forms
//!
//! Country-aware address field schemas and the controlled form state that
//! backs the campaign application address form.
//!
//! ## Features
//! - Static registry mapping country codes to ordered field descriptors
//! - Generic fallback schema for unsupported countries
//! - Live per-field pattern validation
//! - Country switches discard previously entered values

use thiserror::Error;

pub mod descriptor;
pub mod form;
pub mod registry;

pub use descriptor::{CountryCode, FieldDescriptor, FieldKind};
pub use form::{AddressForm, FieldView};
pub use registry::{lookup, CountrySchema};

/// Forms error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormsError {
    #[error("No country selected")]
    NoCountry,

    #[error("Unknown field `{0}` for the selected country")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, FormsError>;
