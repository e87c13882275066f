pub mod app;

pub use app::domain::validation::{
    format_identity_number, format_phone, validate_email, validate_human_name, validate_identity_number,
    validate_phone,
};
pub use app::features::email_editor::{EditorEvent, EditorMode, EmailEditor};
pub use app::features::resend_qr::ResendFlow;
