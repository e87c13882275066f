use std::sync::Arc;

/// Human-readable application name, used in console output.
pub const APP_NAME: &str = "Reenviar QR";

/// Shared state handed to every resend session. The mail adapter lives inside
/// the registry, which is the only thing that sends.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn registry::RegistrationService>,
    pub config: config::Config,
    pub resend_cooldown: features::resend_qr::ResendCooldown,
}

impl AppState {
    /// Wire mail adapter and registry from config, loading the seed file if set.
    pub async fn from_config(config: config::Config) -> Result<Self, error::AppError> {
        let mail = mail::from_config(&config)?;
        let records = match &config.registry_seed {
            Some(path) => registry::load_seed_file(path).await?,
            None => Vec::new(),
        };
        let registry = registry::InMemoryRegistry::with_records(records, mail, config.mail_from.clone());
        let resend_cooldown = features::resend_qr::ResendCooldown::new(config.resend_cooldown);
        Ok(Self {
            registry: Arc::new(registry),
            config,
            resend_cooldown,
        })
    }

    /// Start a fresh search/edit/success session.
    pub fn new_flow(&self) -> features::resend_qr::ResendFlow {
        features::resend_qr::ResendFlow::new(
            self.config.email_domains.clone(),
            self.resend_cooldown.clone(),
        )
    }
}

pub mod config;
pub mod domain;
pub mod error;
pub mod features;
pub mod mail;
pub mod registry;
