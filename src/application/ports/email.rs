// src/application/ports/email.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use serde::Serialize;

/// A file that has already been uploaded and is referenced by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailAttachment {
    pub filename: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub attachments: Vec<EmailAttachment>,
}

#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    /// Deliver `message`. Any failure maps to `ApplicationError::Dispatch`.
    async fn send(&self, message: EmailMessage) -> ApplicationResult<()>;
}

/// Business contact details appended to outgoing mail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}
