use super::ProductCommandService;
use crate::{
    application::{
        commands::{capability::ensure_capability, slug_write::write_with_slug_retry},
        dto::{AuthenticatedUser, ProductDto},
        error::ApplicationResult,
    },
    domain::product::{
        Currency, Measure, NewProduct, Price, ProductCategory, ProductImage, ProductName, Stock,
    },
};
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct CreateProductCommand {
    pub name: String,
    pub description: Option<String>,
    pub category: ProductCategory,
    pub weight_per_piece: f64,
    pub pieces_per_kg: f64,
    pub price: Decimal,
    pub currency: Option<String>,
    pub stock: Option<i64>,
    pub images: Vec<ProductImage>,
}

impl ProductCommandService {
    pub async fn create_product(
        &self,
        actor: &AuthenticatedUser,
        command: CreateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        ensure_capability(actor, "products", "write")?;

        let mut draft = NewProduct {
            name: ProductName::new(command.name)?,
            slug: None,
            description: command
                .description
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty()),
            category: command.category,
            weight_per_piece: Measure::new("weight_per_piece", command.weight_per_piece)?,
            pieces_per_kg: Measure::new("pieces_per_kg", command.pieces_per_kg)?,
            price: Price::new(command.price)?,
            currency: command
                .currency
                .map(Currency::new)
                .transpose()?
                .unwrap_or_default(),
            stock: Stock::new(command.stock.unwrap_or_default())?,
            images: command.images,
            created_by: Some(actor.id),
            created_at: self.clock.now(),
        };

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

        tracing::info!(product = %created.slug, "product created");
        Ok(created.into())
    }
}
