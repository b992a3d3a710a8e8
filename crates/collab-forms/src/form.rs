//! Controlled address form state
//!
//! Headless equivalent of the address form component: the owner of the
//! selected country and the per-field values. The form holds no derived
//! state; every view is computed from the schema plus the current values.

use crate::descriptor::{CountryCode, FieldDescriptor};
use crate::registry::{self, CountrySchema};
use crate::{FormsError, Result};
use std::collections::HashMap;

/// One rendered field: its descriptor, current value, and live-validation
/// error message (only for non-empty values that fail the pattern).
#[derive(Debug)]
pub struct FieldView<'a> {
    pub descriptor: &'a FieldDescriptor,
    pub value: &'a str,
    pub error: Option<String>,
}

/// The live address form: selected country plus the field-name → value map
/// scoped to that country's schema.
#[derive(Clone, Debug, Default)]
pub struct AddressForm {
    country: Option<CountryCode>,
    values: HashMap<String, String>,
}

impl AddressForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(&self) -> Option<&CountryCode> {
        self.country.as_ref()
    }

    /// Select a country. Switching country discards all previously entered
    /// values; re-selecting the same country is a no-op.
    pub fn set_country(&mut self, country: CountryCode) {
        if self.country.as_ref() == Some(&country) {
            return;
        }
        tracing::debug!(country = %country, "country changed, clearing address values");
        self.country = Some(country);
        self.values.clear();
    }

    /// Schema for the selected country, if any.
    pub fn schema(&self) -> Option<&'static CountrySchema> {
        self.country.as_ref().map(registry::lookup)
    }

    /// Merge one keystroke's worth of change into the form. The field must
    /// exist in the selected country's schema.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let schema = self.schema().ok_or(FormsError::NoCountry)?;
        if !schema.has_field(name) {
            return Err(FormsError::UnknownField(name.to_string()));
        }
        self.values.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Current value for a field, empty string if untouched.
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Trimmed value, `None` when empty after trimming.
    pub fn trimmed(&self, name: &str) -> Option<&str> {
        let v = self.value(name).trim();
        (!v.is_empty()).then_some(v)
    }

    /// All non-empty values in schema order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        match self.schema() {
            Some(schema) => schema
                .fields()
                .iter()
                .filter_map(|f| self.trimmed(f.name).map(|v| (f.name, v)))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Render the form: one view per descriptor, in schema order. A field is
    /// invalid only when non-empty and failing its pattern; required-but-empty
    /// is deferred to submission time.
    pub fn fields(&self) -> Vec<FieldView<'_>> {
        let Some(schema) = self.schema() else {
            return Vec::new();
        };
        schema
            .fields()
            .iter()
            .map(|descriptor| {
                let value = self.value(descriptor.name);
                let error = descriptor
                    .is_invalid(value)
                    .then(|| format!("Please enter a valid {}", descriptor.label));
                FieldView {
                    descriptor,
                    value,
                    error,
                }
            })
            .collect()
    }

    /// First required field that is still empty after trimming, in schema
    /// order. This models the form-surface required enforcement that fires
    /// when submission is attempted.
    pub fn first_missing_required(&self) -> Option<&'static FieldDescriptor> {
        let schema = self.schema()?;
        schema
            .fields()
            .iter()
            .find(|f| f.required && self.trimmed(f.name).is_none())
    }

    /// First field whose non-empty value fails its pattern, in schema
    /// order. Like the required pass, this fires when submission is
    /// attempted.
    pub fn first_invalid(&self) -> Option<&'static FieldDescriptor> {
        let schema = self.schema()?;
        schema
            .fields()
            .iter()
            .find(|f| f.is_invalid(self.value(f.name)))
    }
}
