//! Outbound provider abstractions and implementations.
//!
//! Trait-based seams for the two remote dependencies (text generation and
//! email delivery), so the HTTP surface can swap real backends for mocks.

pub mod email;
pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

pub use email::{MockEmailProvider, SmtpProvider};
pub use mock::MockTextProvider;
pub use openai::OpenAiTextProvider;

/// Error type for provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Provider not enabled: {0}")]
    NotEnabled(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("Send error: {0}")]
    SendFailed(String),
}

/// An outbound email with plain-text and HTML alternative bodies.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body_text: String,
    pub body_html: String,
}

/// Trait for text generation providers (e.g. OpenAI).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a completion for a system + user message pair.
    async fn generate(&self, system: &str, user: &str) -> Result<String, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}

/// Trait for email delivery providers.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Deliver the message once. No retry on failure.
    async fn send(&self, email: &EmailMessage) -> Result<(), ProviderError>;

    fn is_enabled(&self) -> bool;
}
