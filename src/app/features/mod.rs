pub mod email_editor;
pub mod resend_qr;
