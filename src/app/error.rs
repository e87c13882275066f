use crate::app::mail::EmailError;

/// Startup errors: wiring the mail adapter and loading the registry seed.
/// Runtime form failures are `FlowError`s and never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Registry seed file could not be parsed or failed validation.
    #[error("seed error: {0}")]
    Seed(String),

    #[error(transparent)]
    Mail(#[from] EmailError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
