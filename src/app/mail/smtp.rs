use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, Message},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
};

use super::{EmailError, EmailMessage, EmailSender};

/// SMTP email sender used to deliver QR tickets.
#[derive(Debug)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpMailer {
    /// Create a new SMTP mailer. Credentials are only used when both halves are set.
    /// `from` is the fallback sender for messages that carry none.
    pub fn new(
        host: String,
        port: u16,
        user: Option<String>,
        pass: Option<String>,
        from: String,
    ) -> Result<Self, EmailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&host).port(port);
        if let (Some(user), Some(pass)) = (user, pass) {
            builder = builder.credentials(Credentials::new(user, pass));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    fn sender(&self, message: &EmailMessage) -> Result<Mailbox, EmailError> {
        let from = if message.from.is_empty() { &self.from } else { &message.from };
        from.parse()
            .map_err(|e| EmailError::Config(format!("Invalid from address '{}': {}", from, e)))
    }
}

#[async_trait]
impl EmailSender for SmtpMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        // Registered addresses only pass the loose shape rule, so lettre may
        // still refuse one here.
        let to: Mailbox = message.to.as_str().parse()
            .map_err(|e| EmailError::Send(format!("Invalid to address '{}': {}", message.to, e)))?;

        let email = Message::builder()
            .from(self.sender(message)?)
            .to(to)
            .subject(&message.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| EmailError::Send(format!("Failed to build email message: {}", e)))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| EmailError::Smtp(format!("SMTP send failed: {}", e)))?;

        tracing::info!(to = %message.to, subject = %message.subject, "Email sent (smtp)");
        Ok(())
    }
}
