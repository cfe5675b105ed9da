pub mod smtp;
pub mod template;

pub use smtp::SmtpMailer;

use async_trait::async_trait;

/// A composed email handed to a [`Mailer`] for delivery.
///
/// Addresses are plain strings here; the transport parses them into typed
/// mailboxes when it builds the wire message.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

/// Mail delivery abstraction (production backend is SMTP via lettre).
///
/// Handlers depend on this trait, not on a concrete transport, so tests can
/// substitute a recording double.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one email, returning once the transport accepts or rejects it.
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid email address: {0}")]
    Address(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

impl From<lettre::address::AddressError> for MailError {
    fn from(err: lettre::address::AddressError) -> Self {
        MailError::Address(err.to_string())
    }
}

impl From<lettre::error::Error> for MailError {
    fn from(err: lettre::error::Error) -> Self {
        MailError::Build(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for MailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        MailError::Smtp(err.to_string())
    }
}
