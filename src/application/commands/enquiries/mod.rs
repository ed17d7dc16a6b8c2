mod delete;
mod reply;
mod service;
mod submit;
mod template;
mod update;

pub use delete::DeleteEnquiryCommand;
pub use reply::{ReplyAttachment, ReplyToEnquiryCommand};
pub use service::EnquiryCommandService;
pub use submit::{SubmitEnquiryCommand, SubmittedItem};
pub use update::UpdateEnquiryCommand;
