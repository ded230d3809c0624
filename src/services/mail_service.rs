//! Outbound mail transport.

use std::sync::Arc;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::{error, info};

use crate::config::{MailConfig, SmtpTls};
use crate::models::email::EmailMessage;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Invalid attachment content type: {0}")]
    InvalidContentType(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

/// Sends rendered messages.
///
/// Implementations never fail past this boundary: every error is logged and reported as
/// `false`, leaving the caller to pick the response.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, message: &EmailMessage) -> bool;
}

/// SMTP mailer backed by lettre's tokio transport.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: Arc<AsyncSmtpTransport<Tokio1Executor>>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let address = config
            .username
            .parse()
            .map_err(|_| MailError::InvalidAddress(config.username.clone()))?;
        let from = Mailbox::new(Some(config.from_name.clone()), address);

        let builder = match config.tls {
            SmtpTls::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host),
            SmtpTls::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
                .map_err(|e| MailError::Smtp(e.to_string()))?,
            SmtpTls::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
                .map_err(|e| MailError::Smtp(e.to_string()))?,
        };

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport: Arc::new(transport),
            from,
        })
    }

    fn build_message(&self, email: &EmailMessage) -> Result<Message, MailError> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|_| MailError::InvalidAddress(email.to.clone()))?;

        let builder = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&email.subject);

        let alternative = MultiPart::alternative_plain_html(email.text.clone(), email.html.clone());

        let body = if email.attachments.is_empty() {
            alternative
        } else {
            let mut mixed = MultiPart::mixed().multipart(alternative);
            for attachment in &email.attachments {
                let content_type = ContentType::parse(&attachment.content_type)
                    .map_err(|_| MailError::InvalidContentType(attachment.content_type.clone()))?;
                mixed = mixed.singlepart(
                    Attachment::new(attachment.filename.clone())
                        .body(attachment.content.to_vec(), content_type),
                );
            }
            mixed
        };

        builder
            .multipart(body)
            .map_err(|e| MailError::Build(e.to_string()))
    }

    async fn try_send(&self, email: &EmailMessage) -> Result<(), MailError> {
        let message = self.build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &EmailMessage) -> bool {
        match self.try_send(message).await {
            Ok(()) => {
                info!("✅ Email sent successfully to {} ({})", message.to, message.subject);
                true
            }
            Err(e) => {
                error!("❌ Error sending email to {}: {}", message.to, e);
                false
            }
        }
    }
}
