use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RegistrationRecord, RegistrationService, RegistryError};
use crate::app::domain::{Email, IdentityNumber, RegistrationId};
use crate::app::mail::{EmailMessage, EmailSender};

/// Process-local registry. Records live as long as the value does.
pub struct InMemoryRegistry {
    records: RwLock<HashMap<RegistrationId, RegistrationRecord>>,
    mail: Arc<dyn EmailSender>,
    mail_from: String,
}

impl InMemoryRegistry {
    pub fn new(mail: Arc<dyn EmailSender>, mail_from: impl Into<String>) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            mail,
            mail_from: mail_from.into(),
        }
    }

    pub fn with_records(
        records: impl IntoIterator<Item = RegistrationRecord>,
        mail: Arc<dyn EmailSender>,
        mail_from: impl Into<String>,
    ) -> Self {
        let mut map = HashMap::new();
        for record in records {
            if let Some(replaced) = map.insert(record.id, record) {
                tracing::warn!(id = %replaced.id, "registration id listed twice, keeping the later record");
            }
        }
        Self {
            records: RwLock::new(map),
            mail,
            mail_from: mail_from.into(),
        }
    }

    /// Insert or replace a record.
    pub async fn insert(&self, record: RegistrationRecord) {
        self.records.write().await.insert(record.id, record);
    }

    pub async fn get(&self, id: RegistrationId) -> Option<RegistrationRecord> {
        self.records.read().await.get(&id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

/// Ticket email for a registration.
fn ticket_message(record: &RegistrationRecord, to: Email, from: &str) -> EmailMessage {
    let body = format!(
        "Hola {},\n\nEste es tu código QR de acceso al evento.\nCódigo de entrada: {}\n\nPresenta este código en el ingreso.",
        record.full_name(),
        record.id
    );
    EmailMessage::new(to, "Tu código QR de registro".to_string(), body, from)
}

#[async_trait]
impl RegistrationService for InMemoryRegistry {
    async fn search_by_identity_number(
        &self,
        identity_number: &IdentityNumber,
    ) -> Result<Option<RegistrationRecord>, RegistryError> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|r| r.identity_number.as_ref() == Some(identity_number))
            .cloned())
    }

    async fn update_email(&self, id: RegistrationId, email: &Email) -> Result<(), RegistryError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id).ok_or(RegistryError::NotFound(id))?;
        tracing::info!(%id, old = %record.email, new = %email, "registration email updated");
        record.email = email.as_str().to_string();
        Ok(())
    }

    async fn resend_notifications(&self, id: RegistrationId) -> Result<(), RegistryError> {
        let record = self.get(id).await.ok_or(RegistryError::NotFound(id))?;
        let to = Email::new(&record.email)
            .map_err(|e| RegistryError::Validation(e.to_string()))?;
        self.mail.send(&ticket_message(&record, to, &self.mail_from)).await?;
        tracing::info!(%id, to = %record.email, "QR ticket resent");
        Ok(())
    }
}
