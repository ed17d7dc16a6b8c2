mod service;

pub use service::ProductQueryService;
