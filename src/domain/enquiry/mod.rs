pub mod enrichment;
pub mod entity;
pub mod repair;
pub mod repository;
pub mod value_objects;

pub use enrichment::{EnquiryEnrichment, EnrichedItems};
pub use entity::{Enquiry, EnquiryDraft, EnquiryItem, EnquiryUpdate, NewEnquiry, RequestedItem};
pub use repair::{ReferenceRepair, RepairReport};
pub use repository::{EnquiryReadRepository, EnquiryWriteRepository};
pub use value_objects::{CustomerContact, EnquiryId, EnquiryStatus, Quantity};
