use super::CategoryCommandService;
use crate::{
    application::{
        commands::{capability::ensure_capability, slug_write::write_with_slug_retry},
        dto::{AuthenticatedUser, CategoryDto},
        error::ApplicationResult,
    },
    domain::category::{CategoryName, NewCategory},
};
use std::sync::Arc;

pub struct CreateCategoryCommand {
    pub name: String,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "write")?;

        let name = CategoryName::new(command.name)?;
        self.ensure_name_available(&name, None).await?;

        let mut draft = NewCategory::new(name, self.clock.now());
        let owners = self.slug_owners();
        let created = write_with_slug_retry(
            &self.slugs,
            &mut draft,
            true,
            &owners,
            self.conflict_retries,
            |record| {
                let repo = Arc::clone(&self.write_repo);
                let record = record.clone();
                async move { repo.insert(record).await }
            },
        )
        .await?;

        tracing::info!(category = %created.slug, "category created");
        Ok(created.into())
    }
}
