// src/infrastructure/repositories/postgres_product.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::{
    Currency, Measure, NewProduct, Price, Product, ProductCategory, ProductId, ProductImage,
    ProductName, ProductReadRepository, ProductUpdate, ProductWriteRepository, Stock,
};
use crate::domain::slug::Slug;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};

#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PRODUCT_COLUMNS: &str = "id, name, slug, description, category, weight_per_piece, \
     pieces_per_kg, price, currency, stock, images, is_active, created_by, created_at, updated_at";

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    category: String,
    weight_per_piece: f64,
    pieces_per_kg: f64,
    price: Decimal,
    currency: String,
    stock: i64,
    images: Json<Vec<ProductImage>>,
    is_active: bool,
    created_by: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId::new(row.id)?,
            name: ProductName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            description: row.description,
            category: row.category.parse::<ProductCategory>()?,
            weight_per_piece: Measure::new("weight_per_piece", row.weight_per_piece)?,
            pieces_per_kg: Measure::new("pieces_per_kg", row.pieces_per_kg)?,
            price: Price::new(row.price)?,
            currency: Currency::new(row.currency)?,
            stock: Stock::new(row.stock)?,
            images: row.images.0,
            is_active: row.is_active,
            created_by: row.created_by.map(UserId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ProductWriteRepository for PostgresProductRepository {
    async fn insert(&self, product: NewProduct) -> DomainResult<Product> {
        let slug = product.assigned_slug()?.clone();
        let NewProduct {
            name,
            description,
            category,
            weight_per_piece,
            pieces_per_kg,
            price,
            currency,
            stock,
            images,
            created_by,
            created_at,
            ..
        } = product;

        let sql = format!(
            "INSERT INTO products (name, slug, description, category, weight_per_piece, pieces_per_kg,
                                   price, currency, stock, images, is_active, created_by, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, TRUE, $11, $12, $12)
             RETURNING {PRODUCT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(name.as_str())
            .bind(slug.as_str())
            .bind(description)
            .bind(category.as_str())
            .bind(weight_per_piece.value())
            .bind(pieces_per_kg.value())
            .bind(price.amount())
            .bind(currency.as_str())
            .bind(stock.value())
            .bind(Json(images))
            .bind(created_by.map(i64::from))
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Product::try_from(row)
    }

    async fn update(&self, update: ProductUpdate) -> DomainResult<Product> {
        let ProductUpdate {
            id,
            name,
            slug,
            description,
            category,
            weight_per_piece,
            pieces_per_kg,
            price,
            currency,
            stock,
            images,
            is_active,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE products SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(Some(description).filter(|text| !text.is_empty()));
        }
        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category.as_str());
        }
        if let Some(weight) = weight_per_piece {
            builder.push(", weight_per_piece = ");
            builder.push_bind(weight.value());
        }
        if let Some(pieces) = pieces_per_kg {
            builder.push(", pieces_per_kg = ");
            builder.push_bind(pieces.value());
        }
        if let Some(price) = price {
            builder.push(", price = ");
            builder.push_bind(price.amount());
        }
        if let Some(currency) = currency {
            builder.push(", currency = ");
            builder.push_bind(currency.as_str().to_string());
        }
        if let Some(stock) = stock {
            builder.push(", stock = ");
            builder.push_bind(stock.value());
        }
        if let Some(images) = images {
            builder.push(", images = ");
            builder.push_bind(Json(images));
        }
        if let Some(is_active) = is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(PRODUCT_COLUMNS);

        let row = builder
            .build_query_as::<ProductRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("product not found".into()))?;

        Product::try_from(row)
    }
}

#[async_trait]
impl ProductReadRepository for PostgresProductRepository {
    async fn find_by_id(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Product>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Product::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[ProductId]) -> DomainResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ANY($1)");
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn list_active(&self, category: Option<ProductCategory>) -> DomainResult<Vec<Product>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(PRODUCT_COLUMNS);
        builder.push(" FROM products WHERE is_active = TRUE");
        if let Some(category) = category {
            builder.push(" AND category = ");
            builder.push_bind(category.as_str());
        }
        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows = builder
            .build_query_as::<ProductRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Product::try_from).collect()
    }
}
