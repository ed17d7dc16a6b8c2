mod service;

pub use service::TestimonialQueryService;
