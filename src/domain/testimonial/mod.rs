pub mod entity;
pub mod repository;

pub use entity::{NewTestimonial, Testimonial, TestimonialId, TestimonialUpdate};
pub use repository::TestimonialRepository;
