use std::sync::Arc;

use crate::{
    application::{
        dto::TestimonialDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::testimonial::{TestimonialId, TestimonialRepository},
};

pub struct TestimonialQueryService {
    repo: Arc<dyn TestimonialRepository>,
}

impl TestimonialQueryService {
    pub fn new(repo: Arc<dyn TestimonialRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_testimonials(&self) -> ApplicationResult<Vec<TestimonialDto>> {
        let testimonials = self.repo.list_active().await?;
        Ok(testimonials.into_iter().map(Into::into).collect())
    }

    pub async fn get_testimonial(&self, id: i64) -> ApplicationResult<TestimonialDto> {
        let id = TestimonialId::new(id)
            .map_err(|_| ApplicationError::not_found("testimonial not found"))?;
        self.repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("testimonial not found"))
    }
}
