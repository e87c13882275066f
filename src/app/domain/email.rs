use validator::ValidationError;

use super::email_parts::EmailParts;
use super::messages::{check_field, FieldKind};
use super::validation::validate_email;

/// Contact email. Once constructed, guaranteed to be trimmed and to pass the
/// permissive `local@domain.tld` rule. Case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new Email from a string. Trims whitespace, then validates.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = email.as_ref().trim();
        check_field(FieldKind::Email, trimmed, validate_email)?;
        Ok(Self(trimmed.to_string()))
    }

    /// Get the email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split at the rightmost `@` into editor parts.
    pub fn parts(&self) -> EmailParts {
        EmailParts::split(&self.0)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
