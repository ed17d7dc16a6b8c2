use super::EnquiryCommandService;
use crate::application::{
    commands::capability::ensure_capability, dto::AuthenticatedUser, error::ApplicationResult,
};

pub struct DeleteEnquiryCommand {
    pub slug: String,
}

impl EnquiryCommandService {
    pub async fn delete_enquiry(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteEnquiryCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "enquiries", "write")?;

        let enquiry = self.load(command.slug).await?;
        self.write_repo.delete(enquiry.id).await?;
        tracing::info!(enquiry = %enquiry.slug, "enquiry deleted");
        Ok(())
    }
}
