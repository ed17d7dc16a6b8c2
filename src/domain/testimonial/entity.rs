use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TestimonialId(pub i64);

impl TestimonialId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("testimonial id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TestimonialId> for i64 {
    fn from(value: TestimonialId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Testimonial {
    pub id: TestimonialId,
    pub text: String,
    pub author: String,
    pub img_src: String,
    pub is_active: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTestimonial {
    pub text: String,
    pub author: String,
    pub img_src: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

impl NewTestimonial {
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        img_src: impl Into<String>,
        order: Option<i32>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            text: non_blank("testimonial text", text.into())?,
            author: non_blank("testimonial author", author.into())?,
            img_src: non_blank("image source", img_src.into())?,
            order: order.unwrap_or_default(),
            created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TestimonialUpdate {
    pub id: TestimonialId,
    pub text: Option<String>,
    pub author: Option<String>,
    pub img_src: Option<String>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

impl TestimonialUpdate {
    pub fn new(id: TestimonialId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: None,
            author: None,
            img_src: None,
            is_active: None,
            order: None,
            updated_at,
        }
    }

    pub fn with_text(mut self, text: String) -> DomainResult<Self> {
        self.text = Some(non_blank("testimonial text", text)?);
        Ok(self)
    }

    pub fn with_author(mut self, author: String) -> DomainResult<Self> {
        self.author = Some(non_blank("testimonial author", author)?);
        Ok(self)
    }

    pub fn with_img_src(mut self, img_src: String) -> DomainResult<Self> {
        self.img_src = Some(non_blank("image source", img_src)?);
        Ok(self)
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }
}

fn non_blank(field: &str, value: String) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}
