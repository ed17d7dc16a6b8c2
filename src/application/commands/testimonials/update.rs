use super::TestimonialCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, TestimonialDto},
        error::ApplicationResult,
    },
    domain::testimonial::TestimonialUpdate,
};

#[derive(Default)]
pub struct UpdateTestimonialCommand {
    pub id: i64,
    pub testimonial: Option<String>,
    pub by: Option<String>,
    pub img_src: Option<String>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

impl TestimonialCommandService {
    pub async fn update_testimonial(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateTestimonialCommand,
    ) -> ApplicationResult<TestimonialDto> {
        ensure_capability(actor, "testimonials", "write")?;

        let existing = self.load(command.id).await?;
        let mut update = TestimonialUpdate::new(existing.id, self.clock.now());
        if let Some(text) = command.testimonial {
            update = update.with_text(text)?;
        }
        if let Some(author) = command.by {
            update = update.with_author(author)?;
        }
        if let Some(img_src) = command.img_src {
            update = update.with_img_src(img_src)?;
        }
        if let Some(is_active) = command.is_active {
            update = update.with_is_active(is_active);
        }
        if let Some(order) = command.order {
            update = update.with_order(order);
        }

        let updated = self.repo.update(update).await?;
        Ok(updated.into())
    }
}
