use super::{EnquiryCommandService, template::render_reply};
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::email::{EmailAttachment, EmailMessage},
    },
    domain::enquiry::{EnquiryStatus, EnquiryUpdate},
};

pub struct ReplyAttachment {
    pub filename: String,
    pub url: String,
}

pub struct ReplyToEnquiryCommand {
    pub slug: String,
    pub message: String,
    pub attachments: Vec<ReplyAttachment>,
}

impl EnquiryCommandService {
    /// Email the customer, then mark the enquiry as contacted.
    ///
    /// The status is left untouched when delivery fails.
    pub async fn reply_to_enquiry(
        &self,
        actor: &AuthenticatedUser,
        command: ReplyToEnquiryCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "enquiries", "write")?;

        if command.message.trim().is_empty() {
            return Err(ApplicationError::validation("reply message is required"));
        }

        let enquiry = self.load(command.slug).await?;
        let attachments: Vec<EmailAttachment> = command
            .attachments
            .into_iter()
            .map(|file| EmailAttachment {
                filename: file.filename,
                url: file.url,
            })
            .collect();

        let now = self.clock.now();
        let message = EmailMessage {
            to: enquiry.contact.email.to_string(),
            subject: format!("Re: Your Enquiry - {}", enquiry.slug),
            html: render_reply(
                enquiry.slug.as_str(),
                &command.message,
                &attachments,
                &self.company,
                now,
            ),
            attachments,
        };

        if let Err(err) = self.mailer.send(message).await {
            tracing::error!(enquiry = %enquiry.slug, error = %err, "enquiry reply could not be sent");
            return Err(match err {
                ApplicationError::Dispatch(_) => err,
                other => ApplicationError::dispatch(other.to_string()),
            });
        }

        let update = EnquiryUpdate::new(enquiry.id, now).with_status(EnquiryStatus::Contacted);
        self.write_repo.update(update).await?;
        tracing::info!(enquiry = %enquiry.slug, "enquiry reply sent");
        Ok(())
    }
}
