use super::TestimonialCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, TestimonialDto},
        error::ApplicationResult,
    },
    domain::testimonial::NewTestimonial,
};

pub struct CreateTestimonialCommand {
    pub testimonial: String,
    pub by: String,
    pub img_src: String,
    pub order: Option<i32>,
}

impl TestimonialCommandService {
    pub async fn create_testimonial(
        &self,
        actor: &AuthenticatedUser,
        command: CreateTestimonialCommand,
    ) -> ApplicationResult<TestimonialDto> {
        ensure_capability(actor, "testimonials", "write")?;

        let draft = NewTestimonial::new(
            command.testimonial,
            command.by,
            command.img_src,
            command.order,
            self.clock.now(),
        )?;
        let created = self.repo.insert(draft).await?;
        Ok(created.into())
    }
}
