//! Email service
//!
//! Sends transactional mail over SMTP and hands the caller a receipt with
//! the message id and, when the provider exposes one, a preview URL. The
//! receipt travels back through the call chain as request-scoped state;
//! nothing about a send is kept in process-wide variables.

use anyhow::{anyhow, Context, Result};
use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SmtpConfig;

/// Outgoing message handed to the provider
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Provider receipt for a sent message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailReceipt {
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

/// Email service
pub struct EmailService {
    config: SmtpConfig,
}

impl EmailService {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Whether SMTP has been configured at all.
    pub fn is_configured(&self) -> bool {
        !self.config.host.is_empty()
    }

    /// Inbox notified about contact submissions, if configured.
    pub fn notify_address(&self) -> Option<&str> {
        self.config.notify_to.as_deref()
    }

    /// Send a message and return its receipt.
    pub async fn send(&self, email: OutgoingEmail) -> Result<EmailReceipt> {
        if !self.is_configured() {
            return Err(anyhow!("SMTP host not configured"));
        }

        let message_id = format!("<{}@{}>", Uuid::new_v4(), self.config.host);
        let from = format!("{} <{}>", self.config.from_name, self.config.from);

        let message = Message::builder()
            .from(from
                .parse()
                .map_err(|e| anyhow!("Invalid from address: {}", e))?)
            .to(email
                .to
                .parse()
                .map_err(|e| anyhow!("Invalid to address: {}", e))?)
            .subject(email.subject.clone())
            .message_id(Some(message_id.clone()))
            .header(ContentType::TEXT_HTML)
            .body(email.html)
            .map_err(|e| anyhow!("Failed to build email: {}", e))?;

        let mut transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.host)
            .map_err(|e| anyhow!("Failed to create SMTP transport: {}", e))?
            .port(self.config.port);
        if !self.config.username.is_empty() {
            transport = transport.credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ));
        }
        let mailer = transport.build();

        mailer.send(message).await.context("Failed to send email")?;

        let preview_url = preview_url_for(self.config.preview_base_url.as_deref(), &message_id);

        Ok(EmailReceipt {
            message_id,
            preview_url,
        })
    }
}

/// Compose the provider preview URL for a message id, when a preview base
/// is configured.
fn preview_url_for(base: Option<&str>, message_id: &str) -> Option<String> {
    let base = base?;
    let bare_id = message_id.trim_matches(|c| c == '<' || c == '>');
    Some(format!("{}/{}", base.trim_end_matches('/'), bare_id))
}
