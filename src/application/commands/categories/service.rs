use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        category::{
            CategoryId, CategoryName, CategoryReadRepository, CategorySlugOwners,
            CategoryWriteRepository,
        },
        slug::SlugLifecycle,
    },
};

pub struct CategoryCommandService {
    pub(super) write_repo: Arc<dyn CategoryWriteRepository>,
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) slugs: Arc<SlugLifecycle>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) conflict_retries: u32,
}

impl CategoryCommandService {
    pub fn new(
        write_repo: Arc<dyn CategoryWriteRepository>,
        read_repo: Arc<dyn CategoryReadRepository>,
        slugs: Arc<SlugLifecycle>,
        clock: Arc<dyn Clock>,
        conflict_retries: u32,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slugs,
            clock,
            conflict_retries,
        }
    }

    pub(super) fn slug_owners(&self) -> CategorySlugOwners {
        CategorySlugOwners(Arc::clone(&self.read_repo))
    }

    /// Names are unique. `exclude` is the category being renamed, if any.
    pub(super) async fn ensure_name_available(
        &self,
        name: &CategoryName,
        exclude: Option<CategoryId>,
    ) -> ApplicationResult<()> {
        match self.read_repo.find_by_name(name).await? {
            Some(existing) if Some(existing.id) != exclude => Err(ApplicationError::conflict(
                format!("category '{name}' already exists"),
            )),
            _ => Ok(()),
        }
    }
}
