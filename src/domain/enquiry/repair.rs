use crate::domain::enquiry::repository::{EnquiryReadRepository, EnquiryWriteRepository};
use crate::domain::errors::DomainResult;
use crate::domain::product::{ProductReadRepository, ProductId};
use crate::domain::slug::{Slug, is_valid_slug};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RepairReport {
    pub enquiries_scanned: usize,
    pub items_repaired: usize,
    /// Items with a dangling slug and no resolvable product id. Left as they are.
    pub items_unresolved: usize,
}

/// Back-fills `product_slug` on enquiry items whose slug no longer resolves
/// but whose legacy product id still does.
///
/// Running it again after a successful pass changes nothing. It assumes no
/// concurrent writers.
pub struct ReferenceRepair {
    enquiries: Arc<dyn EnquiryReadRepository>,
    enquiry_writer: Arc<dyn EnquiryWriteRepository>,
    products: Arc<dyn ProductReadRepository>,
}

impl ReferenceRepair {
    pub fn new(
        enquiries: Arc<dyn EnquiryReadRepository>,
        enquiry_writer: Arc<dyn EnquiryWriteRepository>,
        products: Arc<dyn ProductReadRepository>,
    ) -> Self {
        Self {
            enquiries,
            enquiry_writer,
            products,
        }
    }

    pub async fn run(&self) -> DomainResult<RepairReport> {
        let mut report = RepairReport::default();

        for enquiry in self.enquiries.list_all().await? {
            report.enquiries_scanned += 1;

            for (position, item) in enquiry.items.iter().enumerate() {
                if self.slug_resolves(item.product_slug.as_deref()).await? {
                    continue;
                }

                match self.current_slug(item.product_id).await? {
                    Some(slug) => {
                        self.enquiry_writer
                            .backfill_item_slug(enquiry.id, position, &slug)
                            .await?;
                        tracing::debug!(
                            enquiry = %enquiry.slug,
                            position,
                            product_slug = %slug,
                            "enquiry item slug back-filled"
                        );
                        report.items_repaired += 1;
                    }
                    None => report.items_unresolved += 1,
                }
            }
        }

        tracing::info!(
            enquiries_scanned = report.enquiries_scanned,
            items_repaired = report.items_repaired,
            items_unresolved = report.items_unresolved,
            "enquiry reference repair finished"
        );
        Ok(report)
    }

    async fn slug_resolves(&self, product_slug: Option<&str>) -> DomainResult<bool> {
        let Some(raw) = product_slug.filter(|raw| is_valid_slug(raw)) else {
            return Ok(false);
        };
        let slug = Slug::new(raw)?;
        Ok(self.products.find_by_slug(&slug).await?.is_some())
    }

    async fn current_slug(&self, product_id: Option<ProductId>) -> DomainResult<Option<Slug>> {
        let Some(id) = product_id else {
            return Ok(None);
        };
        Ok(self.products.find_by_id(id).await?.map(|product| product.slug))
    }
}
