use super::ProductCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{product::ProductUpdate, slug::Slug},
};

pub struct DeleteProductCommand {
    pub slug: String,
}

impl ProductCommandService {
    /// Deactivates the product. Rows are never removed so enquiries keep their references.
    pub async fn delete_product(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteProductCommand,
    ) -> ApplicationResult<ProductDto> {
        ensure_capability(actor, "products", "write")?;

        let slug = Slug::new(command.slug)
            .map_err(|_| ApplicationError::not_found("product not found"))?;
        let product = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let update = ProductUpdate::new(product.id, self.clock.now()).with_is_active(false);
        let updated = self.write_repo.update(update).await?;
        tracing::info!(product = %slug, "product deactivated");
        Ok(updated.into())
    }
}
