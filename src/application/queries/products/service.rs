use std::sync::Arc;

use crate::{
    application::{
        dto::ProductDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        product::{ProductCategory, ProductReadRepository},
        slug::Slug,
    },
};

pub struct ProductQueryService {
    read_repo: Arc<dyn ProductReadRepository>,
}

impl ProductQueryService {
    pub fn new(read_repo: Arc<dyn ProductReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn list_products(
        &self,
        category: Option<ProductCategory>,
    ) -> ApplicationResult<Vec<ProductDto>> {
        let products = self.read_repo.list_active(category).await?;
        Ok(products.into_iter().map(Into::into).collect())
    }

    /// Inactive products are still returned so old links keep working.
    pub async fn get_product_by_slug(&self, slug: &str) -> ApplicationResult<ProductDto> {
        let slug =
            Slug::new(slug).map_err(|_| ApplicationError::not_found("product not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("product not found"))
    }
}
