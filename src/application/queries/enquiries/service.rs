use std::{collections::HashMap, sync::Arc};

use crate::{
    application::{
        dto::{AuthenticatedUser, EnquiryDto, ProductDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        enquiry::{Enquiry, EnquiryReadRepository},
        product::{ProductId, ProductReadRepository},
        slug::Slug,
    },
};

pub struct EnquiryQueryService {
    read_repo: Arc<dyn EnquiryReadRepository>,
    products: Arc<dyn ProductReadRepository>,
}

impl EnquiryQueryService {
    pub fn new(
        read_repo: Arc<dyn EnquiryReadRepository>,
        products: Arc<dyn ProductReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            products,
        }
    }

    pub async fn list_enquiries(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<EnquiryDto>> {
        ensure_can_read(actor)?;
        let enquiries = self.read_repo.list_all().await?;
        self.with_products(enquiries).await
    }

    pub async fn get_enquiry(
        &self,
        actor: &AuthenticatedUser,
        reference: &str,
    ) -> ApplicationResult<EnquiryDto> {
        ensure_can_read(actor)?;
        let slug =
            Slug::new(reference).map_err(|_| ApplicationError::not_found("enquiry not found"))?;
        let enquiry = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("enquiry not found"))?;

        let mut expanded = self.with_products(vec![enquiry]).await?;
        expanded
            .pop()
            .ok_or_else(|| ApplicationError::not_found("enquiry not found"))
    }

    /// Attaches the current product record to every item, one lookup for the
    /// whole batch. Items whose product is gone keep `product` empty.
    async fn with_products(&self, enquiries: Vec<Enquiry>) -> ApplicationResult<Vec<EnquiryDto>> {
        let mut ids: Vec<ProductId> = enquiries
            .iter()
            .flat_map(|enquiry| enquiry.items.iter().filter_map(|item| item.product_id))
            .collect();
        ids.sort_unstable_by_key(|id| i64::from(*id));
        ids.dedup();

        let products: HashMap<i64, ProductDto> = if ids.is_empty() {
            HashMap::new()
        } else {
            self.products
                .find_by_ids(&ids)
                .await?
                .into_iter()
                .map(|product| (i64::from(product.id), ProductDto::from(product)))
                .collect()
        };

        Ok(enquiries
            .into_iter()
            .map(|enquiry| {
                let mut dto = EnquiryDto::from(enquiry);
                for item in &mut dto.items {
                    item.product = item.product_id.and_then(|id| products.get(&id).cloned());
                }
                dto
            })
            .collect())
    }
}

fn ensure_can_read(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    if actor.has_capability("enquiries", "read") {
        Ok(())
    } else {
        Err(ApplicationError::forbidden("missing capability enquiries:read"))
    }
}
