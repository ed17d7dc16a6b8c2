use crate::domain::errors::DomainResult;
use crate::domain::testimonial::entity::{
    NewTestimonial, Testimonial, TestimonialId, TestimonialUpdate,
};
use async_trait::async_trait;

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn insert(&self, testimonial: NewTestimonial) -> DomainResult<Testimonial>;
    async fn update(&self, update: TestimonialUpdate) -> DomainResult<Testimonial>;
    async fn find_by_id(&self, id: TestimonialId) -> DomainResult<Option<Testimonial>>;
    /// Active testimonials by ascending `order`, then newest first.
    async fn list_active(&self) -> DomainResult<Vec<Testimonial>>;
}
