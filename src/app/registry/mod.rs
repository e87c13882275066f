//! Registration lookup and update, plus the QR ticket resend.
//!
//! The flow only talks to [`RegistrationService`]; the in-memory registry is
//! the implementation shipped with the crate.

pub mod memory;
pub mod seed;

pub use memory::InMemoryRegistry;
pub use seed::{load_seed_file, parse_seed, RegistrationSeed};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::app::domain::{Email, IdentityNumber, RegistrationId};
use crate::app::mail::EmailError;

/// A stored registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub id: RegistrationId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Walk-in registrations may have no identity number on file.
    pub identity_number: Option<IdentityNumber>,
    pub categories: Vec<String>,
}

impl RegistrationRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("registration {0} not found")]
    NotFound(RegistrationId),

    #[error("invalid registration data: {0}")]
    Validation(String),

    #[error("ticket delivery failed: {0}")]
    Mail(#[from] EmailError),

    #[error("registry unavailable: {0}")]
    Unavailable(String),
}

/// Registration backend as seen by the resend flow.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Find the registration filed under this identity number, if any.
    async fn search_by_identity_number(
        &self,
        identity_number: &IdentityNumber,
    ) -> Result<Option<RegistrationRecord>, RegistryError>;

    /// Replace the contact email of a registration.
    async fn update_email(&self, id: RegistrationId, email: &Email) -> Result<(), RegistryError>;

    /// Send the QR ticket again to the registration's current email.
    async fn resend_notifications(&self, id: RegistrationId) -> Result<(), RegistryError>;
}
