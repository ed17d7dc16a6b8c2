use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::testimonial::{Testimonial, TestimonialId, TestimonialRepository},
};

pub struct TestimonialCommandService {
    pub(super) repo: Arc<dyn TestimonialRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl TestimonialCommandService {
    pub fn new(repo: Arc<dyn TestimonialRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub(super) async fn load(&self, id: i64) -> ApplicationResult<Testimonial> {
        let id = TestimonialId::new(id)
            .map_err(|_| ApplicationError::not_found("testimonial not found"))?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("testimonial not found"))
    }
}
