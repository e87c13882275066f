pub mod email;
pub mod email_parts;
pub mod identity_number;
pub mod messages;
pub mod person_name;
pub mod phone;
pub mod registration_id;
pub mod validation;

pub use email::Email;
pub use email_parts::EmailParts;
pub use identity_number::IdentityNumber;
pub use messages::{check_field, message, FailureReason, FieldError, FieldKind};
pub use person_name::PersonName;
pub use phone::PhoneNumber;
pub use registration_id::RegistrationId;
