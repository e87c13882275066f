use validator::ValidationError;

use super::messages::{check_field, FieldKind};
use super::validation::validate_human_name;

/// First or last name of a registrant. Trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = raw.as_ref().trim();
        check_field(FieldKind::Name, trimmed, validate_human_name)?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
