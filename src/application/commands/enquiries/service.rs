use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{
            email::{CompanyProfile, EmailDispatcher},
            time::Clock,
            util::ReferenceGenerator,
        },
    },
    domain::{
        enquiry::{Enquiry, EnquiryEnrichment, EnquiryReadRepository, EnquiryWriteRepository},
        product::ProductReadRepository,
        slug::Slug,
    },
};

pub struct EnquiryCommandService {
    pub(super) write_repo: Arc<dyn EnquiryWriteRepository>,
    pub(super) read_repo: Arc<dyn EnquiryReadRepository>,
    pub(super) enrichment: EnquiryEnrichment,
    pub(super) references: Arc<dyn ReferenceGenerator>,
    pub(super) mailer: Arc<dyn EmailDispatcher>,
    pub(super) company: CompanyProfile,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) conflict_retries: u32,
}

impl EnquiryCommandService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        write_repo: Arc<dyn EnquiryWriteRepository>,
        read_repo: Arc<dyn EnquiryReadRepository>,
        products: Arc<dyn ProductReadRepository>,
        references: Arc<dyn ReferenceGenerator>,
        mailer: Arc<dyn EmailDispatcher>,
        company: CompanyProfile,
        clock: Arc<dyn Clock>,
        conflict_retries: u32,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            enrichment: EnquiryEnrichment::new(products),
            references,
            mailer,
            company,
            clock,
            conflict_retries,
        }
    }

    pub(super) async fn load(&self, reference: String) -> ApplicationResult<Enquiry> {
        let slug =
            Slug::new(reference).map_err(|_| ApplicationError::not_found("enquiry not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("enquiry not found"))
    }
}
