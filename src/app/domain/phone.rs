use validator::ValidationError;

use super::messages::{check_field, FieldKind};
use super::validation::{format_phone, validate_phone};

/// Mobile phone number, stored as ten digits starting with `09`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and normalize. Spaces, dashes and parentheses are tolerated.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        check_field(FieldKind::Phone, raw, validate_phone)?;
        Ok(Self(format_phone(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
