use crate::domain::enquiry::entity::{EnquiryItem, RequestedItem};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::product::ProductReadRepository;
use crate::domain::slug::{Slug, is_valid_slug};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Largest total an enquiry can carry, matching the `NUMERIC(12, 2)` column.
pub const MAX_TOTAL_VALUE: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

/// Result of resolving submitted items against the product store.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedItems {
    pub items: Vec<EnquiryItem>,
    pub total_value: Decimal,
    /// Submitted slugs that matched no product.
    pub dropped: Vec<String>,
}

/// Resolves requested items to canonical products and prices the enquiry.
///
/// Items whose slug matches no product are dropped. The active flag of a
/// product is not consulted.
pub struct EnquiryEnrichment {
    products: Arc<dyn ProductReadRepository>,
}

impl EnquiryEnrichment {
    pub fn new(products: Arc<dyn ProductReadRepository>) -> Self {
        Self { products }
    }

    pub async fn enrich(&self, requested: &[RequestedItem]) -> DomainResult<EnrichedItems> {
        let mut items = Vec::with_capacity(requested.len());
        let mut dropped = Vec::new();
        let mut total_value = Decimal::ZERO;

        for item in requested {
            let product = if is_valid_slug(&item.product_slug) {
                let slug = Slug::new(item.product_slug.clone())?;
                self.products.find_by_slug(&slug).await?
            } else {
                None
            };

            match product {
                Some(product) => {
                    total_value = product
                        .price
                        .amount()
                        .checked_mul(Decimal::from(item.quantity.value()))
                        .and_then(|line| total_value.checked_add(line))
                        .filter(|total| *total <= MAX_TOTAL_VALUE)
                        .ok_or_else(|| {
                            DomainError::Validation(format!(
                                "enquiry total exceeds {MAX_TOTAL_VALUE}"
                            ))
                        })?;
                    items.push(EnquiryItem {
                        product_slug: Some(item.product_slug.clone()),
                        product_id: Some(product.id),
                        quantity: item.quantity,
                    });
                }
                None => dropped.push(item.product_slug.clone()),
            }
        }

        if !dropped.is_empty() {
            tracing::info!(dropped = ?dropped, kept = items.len(), "dropped unresolvable enquiry items");
        }

        Ok(EnrichedItems {
            items,
            total_value,
            dropped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_ceiling_fits_numeric_12_2() {
        assert_eq!(MAX_TOTAL_VALUE, Decimal::new(999_999_999_999, 2));
    }
}
