// src/infrastructure/email/relay.rs
use crate::application::{
    ApplicationError, ApplicationResult,
    ports::email::{EmailAttachment, EmailDispatcher, EmailMessage},
};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub url: String,
    pub token: Option<String>,
    pub from: String,
    pub timeout: Duration,
}

/// Hands messages to an HTTP mail relay as a JSON document.
#[derive(Debug, Clone)]
pub struct HttpRelayDispatcher {
    client: reqwest::Client,
    settings: RelaySettings,
}

#[derive(Serialize)]
struct RelayPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
    attachments: &'a [EmailAttachment],
}

impl HttpRelayDispatcher {
    pub fn new(settings: RelaySettings) -> ApplicationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self { client, settings })
    }
}

#[async_trait]
impl EmailDispatcher for HttpRelayDispatcher {
    async fn send(&self, message: EmailMessage) -> ApplicationResult<()> {
        let payload = RelayPayload {
            from: &self.settings.from,
            to: &message.to,
            subject: &message.subject,
            html: &message.html,
            attachments: &message.attachments,
        };

        let mut request = self.client.post(&self.settings.url).json(&payload);
        if let Some(token) = &self.settings.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|err| {
            tracing::error!(error = %err, to = %message.to, "mail relay unreachable");
            ApplicationError::dispatch(err.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, to = %message.to, "mail relay rejected message");
            return Err(ApplicationError::dispatch(format!(
                "relay responded {status}: {body}"
            )));
        }

        tracing::info!(to = %message.to, subject = %message.subject, "mail handed to relay");
        Ok(())
    }
}
