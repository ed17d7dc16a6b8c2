use crate::domain::enquiry::value_objects::{CustomerContact, EnquiryId, EnquiryStatus, Quantity};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::ProductId;
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// One line of an enquiry as stored.
///
/// `product_slug` is the authoritative reference captured at submission;
/// `product_id` is a weak back-reference. Either may be missing on legacy rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryItem {
    pub product_slug: Option<String>,
    pub product_id: Option<ProductId>,
    pub quantity: Quantity,
}

/// An item as submitted by the customer, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedItem {
    pub product_slug: String,
    pub quantity: Quantity,
}

#[derive(Debug, Clone)]
pub struct Enquiry {
    pub id: EnquiryId,
    pub slug: Slug,
    pub contact: CustomerContact,
    pub items: Vec<EnquiryItem>,
    pub message: Option<String>,
    pub status: EnquiryStatus,
    pub admin_notes: Option<String>,
    pub total_value: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated submission. Building one performs every check that must pass
/// before the product store is consulted.
#[derive(Debug, Clone)]
pub struct EnquiryDraft {
    pub contact: CustomerContact,
    pub items: Vec<RequestedItem>,
    pub message: Option<String>,
}

impl EnquiryDraft {
    pub fn new(
        contact: CustomerContact,
        items: Vec<RequestedItem>,
        message: Option<String>,
    ) -> DomainResult<Self> {
        if items.is_empty() {
            return Err(DomainError::Validation(
                "an enquiry needs at least one item".into(),
            ));
        }
        let message = message
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Ok(Self {
            contact,
            items,
            message,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewEnquiry {
    /// Opaque reference, generated right before the insert.
    pub slug: Option<Slug>,
    pub contact: CustomerContact,
    pub items: Vec<EnquiryItem>,
    pub message: Option<String>,
    pub total_value: Decimal,
    pub created_at: DateTime<Utc>,
}

impl NewEnquiry {
    pub fn assigned_slug(&self) -> DomainResult<&Slug> {
        self.slug
            .as_ref()
            .ok_or_else(|| DomainError::Validation("enquiry reference has not been assigned".into()))
    }
}

/// Admin-side changes. Items and total never change after creation.
#[derive(Debug, Clone)]
pub struct EnquiryUpdate {
    pub id: EnquiryId,
    pub status: Option<EnquiryStatus>,
    pub admin_notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl EnquiryUpdate {
    pub fn new(id: EnquiryId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            status: None,
            admin_notes: None,
            updated_at,
        }
    }

    pub fn with_status(mut self, status: EnquiryStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_admin_notes(mut self, notes: String) -> Self {
        self.admin_notes = Some(notes.trim().to_string());
        self
    }
}
