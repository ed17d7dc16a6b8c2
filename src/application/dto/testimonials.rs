use crate::domain::testimonial::Testimonial;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDto {
    pub id: i64,
    pub testimonial: String,
    pub by: String,
    pub img_src: String,
    pub is_active: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Testimonial> for TestimonialDto {
    fn from(testimonial: Testimonial) -> Self {
        Self {
            id: testimonial.id.into(),
            testimonial: testimonial.text,
            by: testimonial.author,
            img_src: testimonial.img_src,
            is_active: testimonial.is_active,
            order: testimonial.order,
            created_at: testimonial.created_at,
            updated_at: testimonial.updated_at,
        }
    }
}
