use super::EnquiryCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, EnquiryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::enquiry::{EnquiryStatus, EnquiryUpdate},
};

pub struct UpdateEnquiryCommand {
    pub slug: String,
    pub status: Option<EnquiryStatus>,
    pub admin_notes: Option<String>,
}

impl EnquiryCommandService {
    pub async fn update_enquiry(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateEnquiryCommand,
    ) -> ApplicationResult<EnquiryDto> {
        ensure_capability(actor, "enquiries", "write")?;

        if command.status.is_none() && command.admin_notes.is_none() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let enquiry = self.load(command.slug).await?;
        let mut update = EnquiryUpdate::new(enquiry.id, self.clock.now());
        if let Some(status) = command.status {
            update = update.with_status(status);
        }
        if let Some(notes) = command.admin_notes {
            update = update.with_admin_notes(notes);
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
