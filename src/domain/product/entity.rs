use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::value_objects::{
    Currency, Measure, Price, ProductCategory, ProductId, ProductImage, ProductName, Stock,
};
use crate::domain::slug::{Slug, SluggedRecord};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub slug: Slug,
    pub description: Option<String>,
    pub category: ProductCategory,
    pub weight_per_piece: Measure,
    pub pieces_per_kg: Measure,
    pub price: Price,
    pub currency: Currency,
    pub stock: Stock,
    pub images: Vec<ProductImage>,
    pub is_active: bool,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Replace the name. Returns whether it actually changed.
    pub fn rename(&mut self, name: ProductName) -> bool {
        if self.name == name {
            return false;
        }
        self.name = name;
        true
    }
}

impl SluggedRecord for Product {
    type Id = ProductId;

    fn record_id(&self) -> Option<ProductId> {
        Some(self.id)
    }

    fn slug_source(&self) -> &str {
        self.name.as_str()
    }

    fn assign_slug(&mut self, slug: Slug) {
        self.slug = slug;
    }
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: ProductName,
    /// Filled in by the slug lifecycle before the insert.
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub category: ProductCategory,
    pub weight_per_piece: Measure,
    pub pieces_per_kg: Measure,
    pub price: Price,
    pub currency: Currency,
    pub stock: Stock,
    pub images: Vec<ProductImage>,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl NewProduct {
    pub fn assigned_slug(&self) -> DomainResult<&Slug> {
        self.slug
            .as_ref()
            .ok_or_else(|| DomainError::Validation("product slug has not been assigned".into()))
    }
}

impl SluggedRecord for NewProduct {
    type Id = ProductId;

    fn record_id(&self) -> Option<ProductId> {
        None
    }

    fn slug_source(&self) -> &str {
        self.name.as_str()
    }

    fn assign_slug(&mut self, slug: Slug) {
        self.slug = Some(slug);
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub id: ProductId,
    pub name: Option<ProductName>,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub category: Option<ProductCategory>,
    pub weight_per_piece: Option<Measure>,
    pub pieces_per_kg: Option<Measure>,
    pub price: Option<Price>,
    pub currency: Option<Currency>,
    pub stock: Option<Stock>,
    pub images: Option<Vec<ProductImage>>,
    pub is_active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl ProductUpdate {
    pub fn new(id: ProductId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            description: None,
            category: None,
            weight_per_piece: None,
            pieces_per_kg: None,
            price: None,
            currency: None,
            stock: None,
            images: None,
            is_active: None,
            updated_at,
        }
    }

    pub fn with_name(mut self, name: ProductName, slug: Slug) -> Self {
        self.name = Some(name);
        self.slug = Some(slug);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_category(mut self, category: ProductCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_weight_per_piece(mut self, weight: Measure) -> Self {
        self.weight_per_piece = Some(weight);
        self
    }

    pub fn with_pieces_per_kg(mut self, pieces: Measure) -> Self {
        self.pieces_per_kg = Some(pieces);
        self
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn with_stock(mut self, stock: Stock) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn with_images(mut self, images: Vec<ProductImage>) -> Self {
        self.images = Some(images);
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}
