//! Look up a registration by identity number, let the registrant fix their
//! email, and send the QR ticket again.
//!
//! Three steps: `Search` -> `Edit` -> `Success`. Every registry call is awaited
//! before the flow moves on; there is never more than one in flight.

pub mod cooldown;

pub use cooldown::ResendCooldown;

use serde::Serialize;
use strum_macros::Display;

use crate::app::domain::{
    check_field,
    validation::{format_identity_number, validate_email, validate_identity_number},
    Email, EmailParts, FieldError, FieldKind, IdentityNumber,
};
use crate::app::features::email_editor::{EditorEvent, EmailEditor, KnownDomains, Transition};
use crate::app::registry::{RegistrationRecord, RegistrationService};

pub const NOT_FOUND_MESSAGE: &str = "No se encontró ningún registro con esta cédula";
pub const RESEND_FAILED_MESSAGE: &str = "Error al reenviar el QR. Por favor, intenta de nuevo.";
pub const COOLDOWN_MESSAGE: &str = "Espera un momento antes de volver a reenviar el QR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResendStep {
    Search,
    Edit,
    Success,
}

/// Why a step was refused. `Display` gives the text shown under the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    #[error("{}", RESEND_FAILED_MESSAGE)]
    ResendFailed,

    #[error("{}", COOLDOWN_MESSAGE)]
    CoolingDown,

    /// Operation not available in the current step. Never shown to users.
    #[error("not available in the {0} step")]
    WrongStep(ResendStep),
}

/// State of one resend session.
#[derive(Debug, Clone)]
pub struct ResendFlow {
    step: ResendStep,
    identity_input: String,
    identity_error: Option<FlowError>,
    found: Option<RegistrationRecord>,
    editor: EmailEditor,
    email: EmailParts,
    email_error: Option<FlowError>,
    sent_to: Option<Email>,
    cooldown: ResendCooldown,
}

impl ResendFlow {
    pub fn new(domains: KnownDomains, cooldown: ResendCooldown) -> Self {
        Self {
            step: ResendStep::Search,
            identity_input: String::new(),
            identity_error: None,
            found: None,
            editor: EmailEditor::new(domains),
            email: EmailParts::default(),
            email_error: None,
            sent_to: None,
            cooldown,
        }
    }

    pub fn step(&self) -> ResendStep {
        self.step
    }

    pub fn identity_input(&self) -> &str {
        &self.identity_input
    }

    pub fn identity_error(&self) -> Option<&FlowError> {
        self.identity_error.as_ref()
    }

    pub fn found(&self) -> Option<&RegistrationRecord> {
        self.found.as_ref()
    }

    pub fn editor(&self) -> &EmailEditor {
        &self.editor
    }

    pub fn email_parts(&self) -> &EmailParts {
        &self.email
    }

    pub fn email_error(&self) -> Option<&FlowError> {
        self.email_error.as_ref()
    }

    /// Address the ticket went to, once in `Success`.
    pub fn sent_to(&self) -> Option<&Email> {
        self.sent_to.as_ref()
    }

    /// Live typing in the identity field: digits only, max ten.
    pub fn set_identity_input(&mut self, raw: &str) {
        self.identity_input = format_identity_number(raw);
        self.identity_error = None;
    }

    /// Look the registration up. On a hit the flow moves to `Edit` with the
    /// stored email loaded into the editor.
    pub async fn search(&mut self, service: &dyn RegistrationService) -> Result<(), FlowError> {
        if self.step != ResendStep::Search {
            return Err(FlowError::WrongStep(self.step));
        }
        let result = self.lookup(service).await;
        self.identity_error = result.as_ref().err().cloned();
        result
    }

    async fn lookup(&mut self, service: &dyn RegistrationService) -> Result<(), FlowError> {
        check_field(FieldKind::IdentityNumber, &self.identity_input, validate_identity_number)?;
        let identity_number = IdentityNumber::new(&self.identity_input)
            .map_err(|_| FieldError::invalid(FieldKind::IdentityNumber))?;

        let record = match service.search_by_identity_number(&identity_number).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::info!(identity_number = %identity_number, "no registration found");
                return Err(FlowError::NotFound);
            }
            Err(err) => {
                tracing::error!(%err, "registration lookup failed");
                return Err(FlowError::NotFound);
            }
        };

        tracing::info!(id = %record.id, "registration found");
        self.load_email(&record.email);
        self.found = Some(record);
        self.step = ResendStep::Edit;
        Ok(())
    }

    /// Preset mode when the stored domain is one we offer, custom otherwise.
    fn load_email(&mut self, stored: &str) {
        self.editor.reset();
        self.email = EmailParts::split(stored);
        if !self.editor.domains().contains(self.email.domain_part()) {
            self.editor.handle(EditorEvent::SelectOther, &mut self.email);
        }
        self.email_error = None;
    }

    /// Forward one editor interaction. Clears the email error.
    pub fn edit_email(&mut self, event: EditorEvent) -> Result<Transition, FlowError> {
        if self.step != ResendStep::Edit {
            return Err(FlowError::WrongStep(self.step));
        }
        self.email_error = None;
        Ok(self.editor.handle(event, &mut self.email))
    }

    /// Raw select value from the domain dropdown.
    pub fn select_domain(&mut self, value: &str) -> Result<Option<Transition>, FlowError> {
        if self.step != ResendStep::Edit {
            return Err(FlowError::WrongStep(self.step));
        }
        self.email_error = None;
        Ok(self.editor.select(value, &mut self.email))
    }

    /// Save the edited email if it changed, then resend the ticket.
    pub async fn resend(&mut self, service: &dyn RegistrationService) -> Result<(), FlowError> {
        if self.step != ResendStep::Edit {
            return Err(FlowError::WrongStep(self.step));
        }
        let result = self.deliver(service).await;
        self.email_error = result.as_ref().err().cloned();
        result
    }

    async fn deliver(&mut self, service: &dyn RegistrationService) -> Result<(), FlowError> {
        let composed = self.email.compose();
        check_field(FieldKind::Email, &composed, validate_email)?;
        let email = Email::new(&composed).map_err(|_| FieldError::invalid(FieldKind::Email))?;

        let Some(record) = self.found.as_mut() else {
            return Err(FlowError::WrongStep(self.step));
        };

        if !self.cooldown.try_acquire(email.as_str()) {
            tracing::warn!(to = %email, "resend refused by cooldown");
            return Err(FlowError::CoolingDown);
        }

        if email.as_str() != record.email {
            if let Err(err) = service.update_email(record.id, &email).await {
                tracing::error!(%err, id = %record.id, "email update failed");
                self.cooldown.release(email.as_str());
                return Err(FlowError::ResendFailed);
            }
            record.email = email.as_str().to_string();
        }

        if let Err(err) = service.resend_notifications(record.id).await {
            tracing::error!(%err, id = %record.id, "QR resend failed");
            self.cooldown.release(email.as_str());
            return Err(FlowError::ResendFailed);
        }

        self.sent_to = Some(email);
        self.step = ResendStep::Success;
        Ok(())
    }

    /// Back to an empty `Search` step. The cooldown map is kept.
    pub fn reset(&mut self) {
        self.step = ResendStep::Search;
        self.identity_input.clear();
        self.identity_error = None;
        self.found = None;
        self.editor.reset();
        self.email.clear();
        self.email_error = None;
        self.sent_to = None;
    }
}
