// src/infrastructure/repositories/postgres_enquiry.rs
use super::map_sqlx;
use crate::domain::enquiry::{
    CustomerContact, Enquiry, EnquiryId, EnquiryItem, EnquiryReadRepository, EnquiryUpdate,
    EnquiryWriteRepository, NewEnquiry, Quantity,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::ProductId;
use crate::domain::slug::Slug;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

#[derive(Clone)]
pub struct PostgresEnquiryRepository {
    pool: PgPool,
}

impl PostgresEnquiryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ENQUIRY_COLUMNS: &str = "id, slug, customer_name, customer_email, customer_phone, \
     company_name, message, status, admin_notes, total_value, created_at, updated_at";

#[derive(Debug, FromRow)]
struct EnquiryRow {
    id: i64,
    slug: String,
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    company_name: Option<String>,
    message: Option<String>,
    status: String,
    admin_notes: Option<String>,
    total_value: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct ItemRow {
    enquiry_id: i64,
    product_slug: Option<String>,
    product_id: Option<i64>,
    quantity: i32,
}

impl TryFrom<ItemRow> for EnquiryItem {
    type Error = DomainError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        Ok(EnquiryItem {
            product_slug: row.product_slug,
            product_id: row.product_id.map(ProductId::new).transpose()?,
            quantity: Quantity::new(i64::from(row.quantity))?,
        })
    }
}

fn assemble(row: EnquiryRow, items: Vec<EnquiryItem>) -> DomainResult<Enquiry> {
    Ok(Enquiry {
        id: EnquiryId::new(row.id)?,
        slug: Slug::new(row.slug)?,
        contact: CustomerContact::new(
            row.customer_name,
            row.customer_email,
            row.customer_phone,
            row.company_name,
        )?,
        items,
        message: row.message,
        status: row.status.parse()?,
        admin_notes: row.admin_notes,
        total_value: row.total_value,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

impl PostgresEnquiryRepository {
    /// Attach items to `rows`, keeping the row order.
    async fn hydrate(&self, rows: Vec<EnquiryRow>) -> DomainResult<Vec<Enquiry>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let item_rows = sqlx::query_as::<_, ItemRow>(
            "SELECT enquiry_id, product_slug, product_id, quantity
             FROM enquiry_items WHERE enquiry_id = ANY($1)
             ORDER BY enquiry_id, position",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut grouped: HashMap<i64, Vec<EnquiryItem>> = HashMap::new();
        for item in item_rows {
            let enquiry_id = item.enquiry_id;
            grouped
                .entry(enquiry_id)
                .or_default()
                .push(EnquiryItem::try_from(item)?);
        }

        rows.into_iter()
            .map(|row| {
                let items = grouped.remove(&row.id).unwrap_or_default();
                assemble(row, items)
            })
            .collect()
    }

    async fn fetch_by_id(&self, id: EnquiryId) -> DomainResult<Enquiry> {
        let sql = format!("SELECT {ENQUIRY_COLUMNS} FROM enquiries WHERE id = $1");
        let row = sqlx::query_as::<_, EnquiryRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("enquiry not found".into()))?;

        self.hydrate(vec![row])
            .await?
            .pop()
            .ok_or_else(|| DomainError::NotFound("enquiry not found".into()))
    }
}

#[async_trait]
impl EnquiryWriteRepository for PostgresEnquiryRepository {
    async fn insert(&self, enquiry: NewEnquiry) -> DomainResult<Enquiry> {
        let slug = enquiry.assigned_slug()?.clone();
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let sql = format!(
            "INSERT INTO enquiries (slug, customer_name, customer_email, customer_phone, company_name,
                                    message, status, admin_notes, total_value, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, 'new', NULL, $7, $8, $8)
             RETURNING {ENQUIRY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, EnquiryRow>(&sql)
            .bind(slug.as_str())
            .bind(&enquiry.contact.name)
            .bind(enquiry.contact.email.as_str())
            .bind(&enquiry.contact.phone)
            .bind(&enquiry.contact.company)
            .bind(&enquiry.message)
            .bind(enquiry.total_value)
            .bind(enquiry.created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        if !enquiry.items.is_empty() {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO enquiry_items (enquiry_id, position, product_slug, product_id, quantity) ",
            );
            builder.push_values(enquiry.items.iter().enumerate(), |mut values, (position, item)| {
                values
                    .push_bind(row.id)
                    .push_bind(position as i32)
                    .push_bind(item.product_slug.clone())
                    .push_bind(item.product_id.map(i64::from))
                    .push_bind(item.quantity.value() as i32);
            });
            builder
                .build()
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        assemble(row, enquiry.items)
    }

    async fn update(&self, update: EnquiryUpdate) -> DomainResult<Enquiry> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE enquiries SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(status) = update.status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }
        if let Some(notes) = update.admin_notes {
            builder.push(", admin_notes = ");
            builder.push_bind(Some(notes).filter(|text| !text.is_empty()));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(update.id));

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("enquiry not found".into()));
        }

        self.fetch_by_id(update.id).await
    }

    async fn delete(&self, id: EnquiryId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM enquiries WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("enquiry not found".into()));
        }
        Ok(())
    }

    async fn backfill_item_slug(
        &self,
        id: EnquiryId,
        position: usize,
        product_slug: &Slug,
    ) -> DomainResult<()> {
        let position = i32::try_from(position)
            .map_err(|_| DomainError::Validation("item position out of range".into()))?;
        let result = sqlx::query(
            "UPDATE enquiry_items SET product_slug = $3 WHERE enquiry_id = $1 AND position = $2",
        )
        .bind(i64::from(id))
        .bind(position)
        .bind(product_slug.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("enquiry item not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl EnquiryReadRepository for PostgresEnquiryRepository {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Enquiry>> {
        let sql = format!("SELECT {ENQUIRY_COLUMNS} FROM enquiries WHERE slug = $1");
        let row = sqlx::query_as::<_, EnquiryRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> DomainResult<Vec<Enquiry>> {
        let sql = format!("SELECT {ENQUIRY_COLUMNS} FROM enquiries ORDER BY created_at DESC, id DESC");
        let rows = sqlx::query_as::<_, EnquiryRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.hydrate(rows).await
    }
}
