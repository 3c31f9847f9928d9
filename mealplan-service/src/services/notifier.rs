//! Best-effort email delivery of generated plans.

use crate::services::providers::{EmailMessage, EmailProvider, ProviderError};
use lettre::message::Mailbox;
use std::sync::Arc;

const PLAN_SUBJECT: &str = "Your Personalized Diet Plan";

/// Formats a generated plan into an email and delivers it once.
///
/// Failure comes back as a typed error; callers decide what to do with it.
/// The HTTP handlers log and continue, so delivery never blocks a response.
#[derive(Clone)]
pub struct Notifier {
    provider: Arc<dyn EmailProvider>,
}

impl Notifier {
    pub fn new(provider: Arc<dyn EmailProvider>) -> Self {
        Self { provider }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_enabled()
    }

    /// Send `plan` to `to`. The address must parse as a mailbox; the
    /// provider is not invoked otherwise.
    pub async fn send_plan(&self, to: &str, plan: &str) -> Result<(), ProviderError> {
        if to.parse::<Mailbox>().is_err() {
            return Err(ProviderError::InvalidRecipient(format!(
                "not a valid email address: {}",
                to
            )));
        }

        let email = EmailMessage {
            to: to.to_string(),
            subject: PLAN_SUBJECT.to_string(),
            body_text: plan.to_string(),
            body_html: html_body(plan),
        };

        self.provider.send(&email).await
    }
}

/// HTML alternative body: the plan with literal newlines turned into line
/// breaks.
fn html_body(plan: &str) -> String {
    format!(
        "<html><body><p>{}</p></body></html>",
        plan.replace('\n', "<br>")
    )
}
