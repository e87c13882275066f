use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::validation::is_blank;

/// Form fields that carry a user-facing error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldKind {
    IdentityNumber,
    Email,
    Name,
    Phone,
    Categories,
}

/// Why a field was rejected. There is no warning tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FailureReason {
    /// Empty or whitespace-only.
    Required,
    /// Present but fails the field's format rule.
    Invalid,
}

/// Static `(field, reason) -> message` table.
pub const MESSAGES: &[(FieldKind, FailureReason, &str)] = &[
    (FieldKind::IdentityNumber, FailureReason::Required, "La cédula es requerida"),
    (FieldKind::IdentityNumber, FailureReason::Invalid, "La cédula debe tener 10 dígitos"),
    (FieldKind::Email, FailureReason::Required, "El correo electrónico es requerido"),
    (FieldKind::Email, FailureReason::Invalid, "El correo electrónico no es válido"),
    (FieldKind::Name, FailureReason::Required, "El nombre es requerido"),
    (FieldKind::Name, FailureReason::Invalid, "El nombre solo puede contener letras"),
    (FieldKind::Phone, FailureReason::Required, "El teléfono es requerido"),
    (FieldKind::Phone, FailureReason::Invalid, "El teléfono debe tener 10 dígitos y empezar con 09"),
    (FieldKind::Categories, FailureReason::Required, "Debes seleccionar al menos un deporte"),
];

/// Look up the message for a field failure. `None` for pairs with no entry
/// (categories have no format rule, so no `Invalid` message).
pub fn message(kind: FieldKind, reason: FailureReason) -> Option<&'static str> {
    MESSAGES
        .iter()
        .find(|(k, r, _)| *k == kind && *r == reason)
        .map(|(_, _, msg)| *msg)
}

/// A rejected field, displayable as its table message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub kind: FieldKind,
    pub reason: FailureReason,
}

impl FieldError {
    pub fn new(kind: FieldKind, reason: FailureReason) -> Self {
        Self { kind, reason }
    }

    pub fn required(kind: FieldKind) -> Self {
        Self::new(kind, FailureReason::Required)
    }

    pub fn invalid(kind: FieldKind) -> Self {
        Self::new(kind, FailureReason::Invalid)
    }

    /// Stable machine code, e.g. `email_invalid`.
    pub fn code(&self) -> String {
        format!("{}_{}", self.kind, self.reason)
    }

    pub fn message(&self) -> &'static str {
        message(self.kind, self.reason).unwrap_or("Valor no válido")
    }

    /// Convert into the `validator` error used by the domain newtypes.
    pub fn into_validation_error(self) -> validator::ValidationError {
        let mut error = validator::ValidationError::new(match (self.kind, self.reason) {
            (FieldKind::IdentityNumber, FailureReason::Required) => "identity_number_required",
            (FieldKind::IdentityNumber, FailureReason::Invalid) => "identity_number_invalid",
            (FieldKind::Email, FailureReason::Required) => "email_required",
            (FieldKind::Email, FailureReason::Invalid) => "email_invalid",
            (FieldKind::Name, FailureReason::Required) => "name_required",
            (FieldKind::Name, FailureReason::Invalid) => "name_invalid",
            (FieldKind::Phone, FailureReason::Required) => "phone_required",
            (FieldKind::Phone, FailureReason::Invalid) => "phone_invalid",
            (FieldKind::Categories, FailureReason::Required) => "categories_required",
            (FieldKind::Categories, FailureReason::Invalid) => "categories_invalid",
        });
        error.message = Some(self.message().into());
        error
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}

impl From<FieldError> for validator::ValidationError {
    fn from(e: FieldError) -> Self {
        e.into_validation_error()
    }
}

/// Required-then-format check for a single text field.
pub fn check_field(kind: FieldKind, value: &str, rule: fn(&str) -> bool) -> Result<(), FieldError> {
    if is_blank(value) {
        return Err(FieldError::required(kind));
    }
    if rule(value) {
        Ok(())
    } else {
        Err(FieldError::invalid(kind))
    }
}
