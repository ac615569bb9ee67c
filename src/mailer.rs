//! SMTP mail delivery
//!
//! Sends the notification as a plaintext email over STARTTLS with the
//! configured account. The `Notifier` trait is the seam the runner goes
//! through, so tests can swap in an in-process recorder.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("could not build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, subject: &str, body: &str) -> Result<(), SendError>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    /// Parse both addresses and build the transport up front, so a bad
    /// mail configuration fails at startup instead of after the fetch.
    pub fn new(cfg: &Config) -> Result<Self, SendError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.smtp_server)?
            .port(cfg.smtp_port)
            .credentials(Credentials::new(
                cfg.email_user.clone(),
                cfg.email_pass.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: cfg.email_user.parse()?,
            to: cfg.to_email.parse()?,
        })
    }
}

#[async_trait]
impl Notifier for SmtpMailer {
    async fn send(&self, subject: &str, body: &str) -> Result<(), SendError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        self.transport.send(message).await?;
        Ok(())
    }
}
