mod create;
mod delete;
mod service;
mod update;

pub use create::CreateTestimonialCommand;
pub use delete::DeleteTestimonialCommand;
pub use service::TestimonialCommandService;
pub use update::UpdateTestimonialCommand;
