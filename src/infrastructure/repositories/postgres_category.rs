// src/infrastructure/repositories/postgres_category.rs
use super::map_sqlx;
use crate::domain::category::{
    Category, CategoryId, CategoryName, CategoryReadRepository, CategoryUpdate,
    CategoryWriteRepository, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_one(&self, column: &str, value: &str) -> DomainResult<Option<Category>> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE {column} = $1");
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }
}

const CATEGORY_COLUMNS: &str = "id, name, slug, is_active, created_at, updated_at";

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: Slug::new(row.slug)?,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CategoryWriteRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let slug = category.assigned_slug()?.clone();
        let sql = format!(
            "INSERT INTO categories (name, slug, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING {CATEGORY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(category.name.as_str())
            .bind(slug.as_str())
            .bind(category.is_active)
            .bind(category.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE categories SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(name) = update.name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }
        if let Some(slug) = update.slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(is_active) = update.is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(update.id));
        builder.push(" RETURNING ");
        builder.push(CATEGORY_COLUMNS);

        let row = builder
            .build_query_as::<CategoryRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        Category::try_from(row)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryReadRepository for PostgresCategoryRepository {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        self.find_one("slug", slug.as_str()).await
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        self.find_one("name", name.as_str()).await
    }

    async fn list_active(&self) -> DomainResult<Vec<Category>> {
        let sql = format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE is_active = TRUE ORDER BY name ASC"
        );
        let rows = sqlx::query_as::<_, CategoryRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
