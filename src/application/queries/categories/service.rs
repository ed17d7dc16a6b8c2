use std::sync::Arc;

use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{category::CategoryReadRepository, slug::Slug},
};

pub struct CategoryQueryService {
    read_repo: Arc<dyn CategoryReadRepository>,
}

impl CategoryQueryService {
    pub fn new(read_repo: Arc<dyn CategoryReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.read_repo.list_active().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get_category_by_slug(&self, slug: &str) -> ApplicationResult<CategoryDto> {
        let slug =
            Slug::new(slug).map_err(|_| ApplicationError::not_found("category not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }
}
