use super::products::ProductDto;
use crate::domain::enquiry::{Enquiry, EnquiryItem, EnquiryStatus};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryItemDto {
    pub product_slug: Option<String>,
    pub product_id: Option<i64>,
    pub quantity: u32,
    /// Current product record. Absent when the product no longer exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductDto>,
}

impl From<EnquiryItem> for EnquiryItemDto {
    fn from(item: EnquiryItem) -> Self {
        Self {
            product_slug: item.product_slug,
            product_id: item.product_id.map(Into::into),
            quantity: item.quantity.value(),
            product: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryDto {
    pub id: i64,
    pub slug: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub items: Vec<EnquiryItemDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: EnquiryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_value: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Enquiry> for EnquiryDto {
    fn from(enquiry: Enquiry) -> Self {
        Self {
            id: enquiry.id.into(),
            slug: enquiry.slug.into_inner(),
            customer_name: enquiry.contact.name,
            customer_email: enquiry.contact.email.into(),
            customer_phone: enquiry.contact.phone,
            company_name: enquiry.contact.company,
            items: enquiry.items.into_iter().map(Into::into).collect(),
            message: enquiry.message,
            status: enquiry.status,
            admin_notes: enquiry.admin_notes,
            total_value: enquiry.total_value,
            created_at: enquiry.created_at,
            updated_at: enquiry.updated_at,
        }
    }
}
