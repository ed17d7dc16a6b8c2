use crate::domain::category::entity::{Category, CategoryUpdate, NewCategory};
use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait CategoryWriteRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
}

#[async_trait]
pub trait CategoryReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>>;
    /// Active categories sorted by name.
    async fn list_active(&self) -> DomainResult<Vec<Category>>;
}

pub struct CategorySlugOwners(pub Arc<dyn CategoryReadRepository>);

#[async_trait]
impl SlugLookup<CategoryId> for CategorySlugOwners {
    async fn slug_owner(&self, slug: &Slug) -> DomainResult<Option<CategoryId>> {
        Ok(self.0.find_by_slug(slug).await?.map(|category| category.id))
    }
}
