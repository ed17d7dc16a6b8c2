pub mod categories;
pub mod enquiries;
pub mod products;
pub mod testimonials;
pub mod users;
