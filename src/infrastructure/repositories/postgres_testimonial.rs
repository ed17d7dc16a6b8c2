// src/infrastructure/repositories/postgres_testimonial.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::testimonial::{
    NewTestimonial, Testimonial, TestimonialId, TestimonialRepository, TestimonialUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresTestimonialRepository {
    pool: PgPool,
}

impl PostgresTestimonialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const TESTIMONIAL_COLUMNS: &str =
    "id, testimonial, author, img_src, is_active, sort_order, created_at, updated_at";

#[derive(Debug, FromRow)]
struct TestimonialRow {
    id: i64,
    testimonial: String,
    author: String,
    img_src: String,
    is_active: bool,
    sort_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TestimonialRow> for Testimonial {
    type Error = DomainError;

    fn try_from(row: TestimonialRow) -> Result<Self, Self::Error> {
        Ok(Testimonial {
            id: TestimonialId::new(row.id)?,
            text: row.testimonial,
            author: row.author,
            img_src: row.img_src,
            is_active: row.is_active,
            order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TestimonialRepository for PostgresTestimonialRepository {
    async fn insert(&self, testimonial: NewTestimonial) -> DomainResult<Testimonial> {
        let sql = format!(
            "INSERT INTO testimonials (testimonial, author, img_src, is_active, sort_order, created_at, updated_at)
             VALUES ($1, $2, $3, TRUE, $4, $5, $5)
             RETURNING {TESTIMONIAL_COLUMNS}"
        );
        let row = sqlx::query_as::<_, TestimonialRow>(&sql)
            .bind(&testimonial.text)
            .bind(&testimonial.author)
            .bind(&testimonial.img_src)
            .bind(testimonial.order)
            .bind(testimonial.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Testimonial::try_from(row)
    }

    async fn update(&self, update: TestimonialUpdate) -> DomainResult<Testimonial> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE testimonials SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(text) = update.text {
            builder.push(", testimonial = ");
            builder.push_bind(text);
        }
        if let Some(author) = update.author {
            builder.push(", author = ");
            builder.push_bind(author);
        }
        if let Some(img_src) = update.img_src {
            builder.push(", img_src = ");
            builder.push_bind(img_src);
        }
        if let Some(is_active) = update.is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }
        if let Some(order) = update.order {
            builder.push(", sort_order = ");
            builder.push_bind(order);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(update.id));
        builder.push(" RETURNING ");
        builder.push(TESTIMONIAL_COLUMNS);

        let row = builder
            .build_query_as::<TestimonialRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("testimonial not found".into()))?;

        Testimonial::try_from(row)
    }

    async fn find_by_id(&self, id: TestimonialId) -> DomainResult<Option<Testimonial>> {
        let sql = format!("SELECT {TESTIMONIAL_COLUMNS} FROM testimonials WHERE id = $1");
        let row = sqlx::query_as::<_, TestimonialRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Testimonial::try_from).transpose()
    }

    async fn list_active(&self) -> DomainResult<Vec<Testimonial>> {
        let sql = format!(
            "SELECT {TESTIMONIAL_COLUMNS} FROM testimonials
             WHERE is_active = TRUE ORDER BY sort_order ASC, created_at DESC"
        );
        let rows = sqlx::query_as::<_, TestimonialRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Testimonial::try_from).collect()
    }
}
