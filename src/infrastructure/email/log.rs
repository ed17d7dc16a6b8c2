// src/infrastructure/email/log.rs
use crate::application::{
    ApplicationResult,
    ports::email::{EmailDispatcher, EmailMessage},
};
use async_trait::async_trait;

/// Writes outgoing mail to the log instead of sending it. Used when no relay is configured.
#[derive(Debug, Default, Clone)]
pub struct LoggingEmailDispatcher;

#[async_trait]
impl EmailDispatcher for LoggingEmailDispatcher {
    async fn send(&self, message: EmailMessage) -> ApplicationResult<()> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            attachments = message.attachments.len(),
            body_len = message.html.len(),
            "mail relay not configured; message logged only"
        );
        Ok(())
    }
}
