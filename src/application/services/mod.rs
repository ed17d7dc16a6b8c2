// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            categories::CategoryCommandService, enquiries::EnquiryCommandService,
            products::ProductCommandService, testimonials::TestimonialCommandService,
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            email::{CompanyProfile, EmailDispatcher},
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::ReferenceGenerator,
        },
        queries::{
            categories::CategoryQueryService, enquiries::EnquiryQueryService,
            products::ProductQueryService, testimonials::TestimonialQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        category::{CategoryReadRepository, CategoryWriteRepository},
        enquiry::{EnquiryReadRepository, EnquiryWriteRepository},
        product::{ProductReadRepository, ProductWriteRepository},
        slug::{SlugGenerator, SlugLifecycle, UniqueSlugResolver},
        testimonial::TestimonialRepository,
        user::UserRepository,
    },
};

/// Storage adapters, one per aggregate.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub product_writes: Arc<dyn ProductWriteRepository>,
    pub product_reads: Arc<dyn ProductReadRepository>,
    pub category_writes: Arc<dyn CategoryWriteRepository>,
    pub category_reads: Arc<dyn CategoryReadRepository>,
    pub enquiry_writes: Arc<dyn EnquiryWriteRepository>,
    pub enquiry_reads: Arc<dyn EnquiryReadRepository>,
    pub testimonials: Arc<dyn TestimonialRepository>,
}

/// Non-storage collaborators.
pub struct Ports {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub references: Arc<dyn ReferenceGenerator>,
    pub mailer: Arc<dyn EmailDispatcher>,
}

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub slug_max_attempts: u32,
    pub slug_conflict_retries: u32,
    pub company: CompanyProfile,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            slug_max_attempts: UniqueSlugResolver::DEFAULT_MAX_ATTEMPTS,
            slug_conflict_retries: 3,
            company: CompanyProfile::default(),
        }
    }
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub product_commands: Arc<ProductCommandService>,
    pub product_queries: Arc<ProductQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub enquiry_commands: Arc<EnquiryCommandService>,
    pub enquiry_queries: Arc<EnquiryQueryService>,
    pub testimonial_commands: Arc<TestimonialCommandService>,
    pub testimonial_queries: Arc<TestimonialQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, ports: Ports, settings: ServiceSettings) -> Self {
        let slugs = Arc::new(SlugLifecycle::new(
            Arc::clone(&ports.slugger),
            UniqueSlugResolver::new(settings.slug_max_attempts),
        ));
        let retries = settings.slug_conflict_retries;

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&ports.password_hasher),
            Arc::clone(&ports.token_manager),
            Arc::clone(&ports.clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&ports.clock),
        ));

        let product_commands = Arc::new(ProductCommandService::new(
            Arc::clone(&repos.product_writes),
            Arc::clone(&repos.product_reads),
            Arc::clone(&slugs),
            Arc::clone(&ports.clock),
            retries,
        ));
        let product_queries = Arc::new(ProductQueryService::new(Arc::clone(&repos.product_reads)));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repos.category_writes),
            Arc::clone(&repos.category_reads),
            Arc::clone(&slugs),
            Arc::clone(&ports.clock),
            retries,
        ));
        let category_queries =
            Arc::new(CategoryQueryService::new(Arc::clone(&repos.category_reads)));

        let enquiry_commands = Arc::new(EnquiryCommandService::new(
            Arc::clone(&repos.enquiry_writes),
            Arc::clone(&repos.enquiry_reads),
            Arc::clone(&repos.product_reads),
            Arc::clone(&ports.references),
            Arc::clone(&ports.mailer),
            settings.company,
            Arc::clone(&ports.clock),
            retries,
        ));
        let enquiry_queries = Arc::new(EnquiryQueryService::new(
            Arc::clone(&repos.enquiry_reads),
            Arc::clone(&repos.product_reads),
        ));

        let testimonial_commands = Arc::new(TestimonialCommandService::new(
            Arc::clone(&repos.testimonials),
            Arc::clone(&ports.clock),
        ));
        let testimonial_queries =
            Arc::new(TestimonialQueryService::new(Arc::clone(&repos.testimonials)));

        Self {
            user_commands,
            user_queries,
            product_commands,
            product_queries,
            category_commands,
            category_queries,
            enquiry_commands,
            enquiry_queries,
            testimonial_commands,
            testimonial_queries,
            token_manager: ports.token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Resolve a raw bearer token into the calling user.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
