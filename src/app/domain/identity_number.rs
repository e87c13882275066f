use serde::{Deserialize, Serialize};
use validator::ValidationError;

use super::messages::{check_field, FieldKind};
use super::validation::{format_identity_number, validate_identity_number};

/// National identity number (cédula). Stored as exactly ten ASCII digits.
///
/// Only the ten-digit shape is enforced; no check-digit algorithm is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityNumber(String);

impl IdentityNumber {
    /// Validate raw input. Separators are tolerated; anything else is not.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        check_field(FieldKind::IdentityNumber, raw, validate_identity_number)?;
        Ok(Self(format_identity_number(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IdentityNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IdentityNumber> for String {
    fn from(value: IdentityNumber) -> Self {
        value.0
    }
}

impl std::fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ten_digits() {
        assert_eq!(IdentityNumber::new("1712345678").unwrap().as_str(), "1712345678");
    }

    #[test]
    fn separators_are_dropped() {
        assert_eq!(IdentityNumber::new("171-234-5678").unwrap().as_str(), "1712345678");
    }

    #[test]
    fn short_input_is_invalid() {
        assert_eq!(IdentityNumber::new("12345").unwrap_err().code, "identity_number_invalid");
    }

    #[test]
    fn blank_input_is_required() {
        assert_eq!(IdentityNumber::new("").unwrap_err().code, "identity_number_required");
    }

    #[test]
    fn deserializes_through_validation() {
        let id: IdentityNumber = serde_json::from_str("\"1712345678\"").unwrap();
        assert_eq!(id.as_str(), "1712345678");
        assert!(serde_json::from_str::<IdentityNumber>("\"17x\"").is_err());
    }
}
