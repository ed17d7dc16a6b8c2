use super::TestimonialCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, TestimonialDto},
        error::ApplicationResult,
    },
    domain::testimonial::TestimonialUpdate,
};

pub struct DeleteTestimonialCommand {
    pub id: i64,
}

impl TestimonialCommandService {
    /// Hides the testimonial; the row is kept.
    pub async fn delete_testimonial(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteTestimonialCommand,
    ) -> ApplicationResult<TestimonialDto> {
        ensure_capability(actor, "testimonials", "write")?;

        let existing = self.load(command.id).await?;
        let update = TestimonialUpdate::new(existing.id, self.clock.now()).with_is_active(false);
        let updated = self.repo.update(update).await?;
        Ok(updated.into())
    }
}
