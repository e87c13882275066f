use std::path::PathBuf;
use std::time::Duration;

use crate::app::features::email_editor::KnownDomains;

/// Centralized environment configuration.
/// All env vars and defaults are defined here.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file of registrations loaded into the in-memory registry.
    /// Default: none (empty registry).
    pub registry_seed: Option<PathBuf>,

    /// From/reply address for outgoing ticket emails.
    /// Default: please-configure@example.com
    pub mail_from: String,

    /// Mail adapter: "console" or "smtp".
    /// Default: console
    pub mail_adapter: String,

    /// SMTP host. Required when mail_adapter=smtp.
    pub smtp_host: Option<String>,

    /// SMTP port.
    /// Default: 587
    pub smtp_port: u16,

    /// SMTP username. Optional for some servers.
    pub smtp_user: Option<String>,

    /// SMTP password. Optional for some servers.
    pub smtp_pass: Option<String>,

    /// Minimum gap between two QR resends to the same address.
    /// Default: 60 seconds
    pub resend_cooldown: Duration,

    /// Domains offered by the email select, comma separated in EMAIL_DOMAINS.
    /// Default: @gmail.com, @hotmail.com, @outlook.com, @yahoo.com
    pub email_domains: KnownDomains,
}

impl Config {
    /// Build config from environment variables.
    /// Returns an error if a variable is set but malformed.
    pub fn from_env() -> Result<Self, String> {
        let registry_seed = std::env::var("REGISTRY_SEED").ok().map(PathBuf::from);

        let mail_from = std::env::var("MAIL_FROM")
            .unwrap_or_else(|_| "please-configure@example.com".to_string());

        let mail_adapter = std::env::var("MAIL_ADAPTER")
            .unwrap_or_else(|_| "console".to_string());

        let smtp_host = std::env::var("SMTP_HOST").ok();
        let smtp_port = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse::<u16>()
            .map_err(|_| "SMTP_PORT must be a valid port number")?;
        let smtp_user = std::env::var("SMTP_USER").ok();
        let smtp_pass = std::env::var("SMTP_PASS").ok();

        let resend_cooldown = std::env::var("RESEND_COOLDOWN_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| "RESEND_COOLDOWN_SECS must be a whole number of seconds")?;

        let email_domains = match std::env::var("EMAIL_DOMAINS") {
            Ok(raw) => KnownDomains::parse_list(&raw)
                .map_err(|e| format!("EMAIL_DOMAINS is invalid: {}", e))?,
            Err(_) => KnownDomains::default(),
        };

        Ok(Self {
            registry_seed,
            mail_from,
            mail_adapter,
            smtp_host,
            smtp_port,
            smtp_user,
            smtp_pass,
            resend_cooldown,
            email_domains,
        })
    }

    /// Config for tests. Console mailer, no seed file, no resend cooldown.
    pub fn for_tests() -> Self {
        Self {
            registry_seed: None,
            mail_from: "test@example.com".to_string(),
            mail_adapter: "console".to_string(),
            smtp_host: None,
            smtp_port: 587,
            smtp_user: None,
            smtp_pass: None,
            resend_cooldown: Duration::ZERO,
            email_domains: KnownDomains::default(),
        }
    }
}
