use super::CategoryCommandService;
use crate::{
    application::{
        commands::{capability::ensure_capability, slug_write::write_with_slug_retry},
        dto::{AuthenticatedUser, CategoryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::{CategoryName, CategoryUpdate},
        slug::Slug,
    },
};
use std::sync::Arc;

pub struct UpdateCategoryCommand {
    pub slug: String,
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        ensure_capability(actor, "categories", "write")?;

        let slug = Slug::new(command.slug)
            .map_err(|_| ApplicationError::not_found("category not found"))?;
        let mut category = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let mut fields = CategoryUpdate::new(category.id, self.clock.now());
        if let Some(is_active) = command.is_active {
            fields = fields.with_is_active(is_active);
        }

        let name_changed = match command.name {
            Some(name) => {
                let name = CategoryName::new(name)?;
                self.ensure_name_available(&name, Some(category.id)).await?;
                category.rename(name)
            }
            None => false,
        };

        let owners = self.slug_owners();
        let updated = write_with_slug_retry(
            &self.slugs,
            &mut category,
            name_changed,
            &owners,
            self.conflict_retries,
            |record| {
                let mut update = fields.clone();
                if name_changed {
                    update = update.with_name(record.name.clone(), record.slug.clone());
                }
                let repo = Arc::clone(&self.write_repo);
                async move { repo.update(update).await }
            },
        )
        .await?;

        Ok(updated.into())
    }
}
