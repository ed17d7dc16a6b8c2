use super::ProductCommandService;
use crate::{
    application::{
        commands::{capability::ensure_capability, slug_write::write_with_slug_retry},
        dto::{AuthenticatedUser, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        product::{
            Currency, Measure, Price, ProductCategory, ProductImage, ProductName, ProductUpdate,
            Stock,
        },
        slug::Slug,
    },
};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Partial update addressed by the current slug. `None` leaves a field as is.
#[derive(Default)]
pub struct UpdateProductCommand {
    pub slug: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<ProductCategory>,
    pub weight_per_piece: Option<f64>,
    pub pieces_per_kg: Option<f64>,
    pub price: Option<Decimal>,
    pub currency: Option<String>,
    pub stock: Option<i64>,
    pub images: Option<Vec<ProductImage>>,
    pub is_active: Option<bool>,
}

impl ProductCommandService {
    pub async fn update_product(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProductCommand,
    ) -> ApplicationResult<ProductDto> {
        ensure_capability(actor, "products", "write")?;

        let UpdateProductCommand {
            slug,
            name,
            description,
            category,
            weight_per_piece,
            pieces_per_kg,
            price,
            currency,
            stock,
            images,
            is_active,
        } = command;

        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("product not found"))?;
        let mut product = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("product not found"))?;

        let mut fields = ProductUpdate::new(product.id, self.clock.now());
        if let Some(description) = description {
            fields = fields.with_description(description.trim().to_string());
        }
        if let Some(category) = category {
            fields = fields.with_category(category);
        }
        if let Some(weight) = weight_per_piece {
            fields = fields.with_weight_per_piece(Measure::new("weight_per_piece", weight)?);
        }
        if let Some(pieces) = pieces_per_kg {
            fields = fields.with_pieces_per_kg(Measure::new("pieces_per_kg", pieces)?);
        }
        if let Some(price) = price {
            fields = fields.with_price(Price::new(price)?);
        }
        if let Some(currency) = currency {
            fields = fields.with_currency(Currency::new(currency)?);
        }
        if let Some(stock) = stock {
            fields = fields.with_stock(Stock::new(stock)?);
        }
        if let Some(images) = images {
            fields = fields.with_images(images);
        }
        if let Some(is_active) = is_active {
            fields = fields.with_is_active(is_active);
        }

        let name_changed = match name {
            Some(name) => product.rename(ProductName::new(name)?),
            None => false,
        };

        let owners = self.slug_owners();
        let updated = write_with_slug_retry(
            &self.slugs,
            &mut product,
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

        if name_changed {
            tracing::info!(from = %slug, to = %updated.slug, "product renamed");
        }
        Ok(updated.into())
    }
}
