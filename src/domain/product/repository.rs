use crate::domain::errors::DomainResult;
use crate::domain::product::entity::{NewProduct, Product, ProductUpdate};
use crate::domain::product::value_objects::{ProductCategory, ProductId};
use crate::domain::slug::{Slug, SlugLookup};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ProductWriteRepository: Send + Sync {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product>;
    async fn update(&self, update: ProductUpdate) -> DomainResult<Product>;
}

#[async_trait]
pub trait ProductReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>>;
    /// Products matching any of `ids`, active or not. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[ProductId]) -> DomainResult<Vec<Product>>;
    /// Active products, newest first.
    async fn list_active(&self, category: Option<ProductCategory>) -> DomainResult<Vec<Product>>;
}

/// Exposes product slug ownership to the slug resolver.
pub struct ProductSlugOwners(pub Arc<dyn ProductReadRepository>);

#[async_trait]
impl SlugLookup<ProductId> for ProductSlugOwners {
    async fn slug_owner(&self, slug: &Slug) -> DomainResult<Option<ProductId>> {
        Ok(self.0.find_by_slug(slug).await?.map(|product| product.id))
    }
}
