use super::CategoryCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct DeleteCategoryCommand {
    pub slug: String,
}

impl CategoryCommandService {
    pub async fn delete_category(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "categories", "write")?;

        let slug = Slug::new(command.slug)
            .map_err(|_| ApplicationError::not_found("category not found"))?;
        let category = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        self.write_repo.delete(category.id).await?;
        tracing::info!(category = %slug, "category deleted");
        Ok(())
    }
}
