pub mod category;
pub mod enquiry;
pub mod errors;
pub mod product;
pub mod slug;
pub mod testimonial;
pub mod user;
