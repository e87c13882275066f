#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use regdesk::app::{
    domain::{Email, IdentityNumber, RegistrationId},
    features::{email_editor::KnownDomains, resend_qr::{ResendCooldown, ResendFlow}},
    mail::{EmailError, EmailMessage, EmailSender},
    registry::{InMemoryRegistry, RegistrationRecord, RegistrationService, RegistryError},
};

pub const IDENTITY: &str = "1712345678";
pub const FROM: &str = "entradas@example.com";

/// Mailer that keeps every message for inspection.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingMailer {
    pub fn recipients(&self) -> Vec<String> {
        self.sent.lock().unwrap().iter().map(|m| m.to.as_str().to_string()).collect()
    }
}

#[async_trait]
impl EmailSender for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Mailer that always fails, to exercise the resend error path.
pub struct BrokenMailer;

#[async_trait]
impl EmailSender for BrokenMailer {
    async fn send(&self, _message: &EmailMessage) -> Result<(), EmailError> {
        Err(EmailError::Send("relay down".to_string()))
    }
}

/// Registry whose every call fails.
pub struct UnavailableRegistry;

#[async_trait]
impl RegistrationService for UnavailableRegistry {
    async fn search_by_identity_number(
        &self,
        _identity_number: &IdentityNumber,
    ) -> Result<Option<RegistrationRecord>, RegistryError> {
        Err(RegistryError::Unavailable("timeout".to_string()))
    }

    async fn update_email(&self, _id: RegistrationId, _email: &Email) -> Result<(), RegistryError> {
        Err(RegistryError::Unavailable("timeout".to_string()))
    }

    async fn resend_notifications(&self, _id: RegistrationId) -> Result<(), RegistryError> {
        Err(RegistryError::Unavailable("timeout".to_string()))
    }
}

pub fn record(identity: &str, email: &str) -> RegistrationRecord {
    RegistrationRecord {
        id: RegistrationId::new(),
        first_name: "Carla".to_string(),
        last_name: "Andrade".to_string(),
        email: email.to_string(),
        phone: "0991234567".to_string(),
        identity_number: Some(IdentityNumber::new(identity).unwrap()),
        categories: vec!["voley".to_string()],
    }
}

/// Registry holding one registration under [`IDENTITY`].
pub fn seeded_registry(email: &str, mail: Arc<dyn EmailSender>) -> (InMemoryRegistry, RegistrationId) {
    let r = record(IDENTITY, email);
    let id = r.id;
    (InMemoryRegistry::with_records([r], mail, FROM), id)
}

pub fn test_flow() -> ResendFlow {
    ResendFlow::new(KnownDomains::default(), ResendCooldown::new(Duration::ZERO))
}

pub fn flow_with_cooldown(window: Duration) -> ResendFlow {
    ResendFlow::new(KnownDomains::default(), ResendCooldown::new(window))
}
