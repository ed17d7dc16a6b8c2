use crate::domain::product::{Product, ProductCategory, ProductImage};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: ProductCategory,
    pub weight_per_piece: f64,
    pub pieces_per_kg: f64,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub currency: String,
    pub stock: i64,
    pub images: Vec<ProductImage>,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into(),
            name: product.name.into_inner(),
            slug: product.slug.into_inner(),
            description: product.description,
            category: product.category,
            weight_per_piece: product.weight_per_piece.value(),
            pieces_per_kg: product.pieces_per_kg.value(),
            price: product.price.amount(),
            currency: product.currency.as_str().to_string(),
            stock: product.stock.value(),
            images: product.images,
            is_active: product.is_active,
            created_by: product.created_by.map(Into::into),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
