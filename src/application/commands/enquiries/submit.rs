use super::EnquiryCommandService;
use crate::{
    application::{
        dto::EnquiryDto,
        error::ApplicationResult,
    },
    domain::{
        enquiry::{CustomerContact, EnquiryDraft, NewEnquiry, Quantity, RequestedItem},
        errors::DomainError,
        slug::Slug,
    },
};

pub struct SubmittedItem {
    pub product_slug: String,
    pub quantity: i64,
}

pub struct SubmitEnquiryCommand {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub company_name: Option<String>,
    pub items: Vec<SubmittedItem>,
    pub message: Option<String>,
}

impl EnquiryCommandService {
    /// Public submission. Everything is validated before the product store is read.
    pub async fn submit_enquiry(
        &self,
        command: SubmitEnquiryCommand,
    ) -> ApplicationResult<EnquiryDto> {
        let draft = validate_submission(command)?;
        let enriched = self.enrichment.enrich(&draft.items).await?;

        let mut new_enquiry = NewEnquiry {
            slug: None,
            contact: draft.contact,
            items: enriched.items,
            message: draft.message,
            total_value: enriched.total_value,
            created_at: self.clock.now(),
        };

        let mut attempt = 0u32;
        loop {
            let reference = self.references.generate(new_enquiry.created_at);
            new_enquiry.slug = Some(Slug::new(reference)?);

            match self.write_repo.insert(new_enquiry.clone()).await {
                Ok(created) => {
                    tracing::info!(
                        enquiry = %created.slug,
                        items = created.items.len(),
                        total_value = %created.total_value,
                        "enquiry submitted"
                    );
                    return Ok(created.into());
                }
                Err(DomainError::SlugTaken(detail)) if attempt < self.conflict_retries => {
                    attempt += 1;
                    tracing::warn!(attempt, %detail, "enquiry reference collided, regenerating");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

fn validate_submission(command: SubmitEnquiryCommand) -> ApplicationResult<EnquiryDraft> {
    let contact = CustomerContact::new(
        command.customer_name,
        command.customer_email,
        command.customer_phone,
        command.company_name,
    )?;

    let items = command
        .items
        .into_iter()
        .map(|item| {
            // Blank slugs pass through and are dropped during enrichment.
            Ok(RequestedItem {
                product_slug: item.product_slug.trim().to_string(),
                quantity: Quantity::new(item.quantity)?,
            })
        })
        .collect::<ApplicationResult<Vec<_>>>()?;

    Ok(EnquiryDraft::new(contact, items, command.message)?)
}
