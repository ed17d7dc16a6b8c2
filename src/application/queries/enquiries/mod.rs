mod service;

pub use service::EnquiryQueryService;
