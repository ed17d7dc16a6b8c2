use crate::domain::enquiry::entity::{Enquiry, EnquiryUpdate, NewEnquiry};
use crate::domain::enquiry::value_objects::EnquiryId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::Slug;
use async_trait::async_trait;

#[async_trait]
pub trait EnquiryWriteRepository: Send + Sync {
    /// Fails with `SlugTaken` when the reference is already used.
    async fn insert(&self, enquiry: NewEnquiry) -> DomainResult<Enquiry>;
    async fn update(&self, update: EnquiryUpdate) -> DomainResult<Enquiry>;
    async fn delete(&self, id: EnquiryId) -> DomainResult<()>;
    /// Overwrite the product slug of the item at `position`. Used only by the repair batch.
    async fn backfill_item_slug(
        &self,
        id: EnquiryId,
        position: usize,
        product_slug: &Slug,
    ) -> DomainResult<()>;
}

#[async_trait]
pub trait EnquiryReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Enquiry>>;
    /// Every enquiry, newest first.
    async fn list_all(&self) -> DomainResult<Vec<Enquiry>>;
}
