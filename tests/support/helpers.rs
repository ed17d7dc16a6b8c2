// tests/support/helpers.rs
use super::mocks::{
    DummyPasswordHasher, DummyTokenManager, FixedClock, InMemoryCategories, InMemoryEnquiries,
    InMemoryProducts, InMemoryTestimonials, InMemoryUsers, RecordingEmailDispatcher,
    SequenceReferences,
};
use axum::body;
use axum::http::StatusCode;
use directory_core::application::{
    ports::email::CompanyProfile,
    services::{ApplicationServices, Ports, Repositories, ServiceSettings},
};
use directory_core::infrastructure::util::DefaultSlugGenerator;
use directory_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

/// Services wired to in-memory adapters, with handles kept for assertions.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub users: Arc<InMemoryUsers>,
    pub products: Arc<InMemoryProducts>,
    pub categories: Arc<InMemoryCategories>,
    pub enquiries: Arc<InMemoryEnquiries>,
    pub testimonials: Arc<InMemoryTestimonials>,
    pub mailer: Arc<RecordingEmailDispatcher>,
}

pub struct TestAppBuilder {
    categories: InMemoryCategories,
    mailer: RecordingEmailDispatcher,
    references: SequenceReferences,
    settings: ServiceSettings,
}

impl TestAppBuilder {
    pub fn categories(mut self, categories: InMemoryCategories) -> Self {
        self.categories = categories;
        self
    }

    pub fn mailer(mut self, mailer: RecordingEmailDispatcher) -> Self {
        self.mailer = mailer;
        self
    }

    pub fn references(mut self, references: SequenceReferences) -> Self {
        self.references = references;
        self
    }

    pub fn slug_max_attempts(mut self, attempts: u32) -> Self {
        self.settings.slug_max_attempts = attempts;
        self
    }

    pub fn conflict_retries(mut self, retries: u32) -> Self {
        self.settings.slug_conflict_retries = retries;
        self
    }

    pub fn build(self) -> TestApp {
        let users = Arc::new(InMemoryUsers::default());
        let products = Arc::new(InMemoryProducts::default());
        let categories = Arc::new(self.categories);
        let enquiries = Arc::new(InMemoryEnquiries::default());
        let testimonials = Arc::new(InMemoryTestimonials::default());
        let mailer = Arc::new(self.mailer);

        let services = Arc::new(ApplicationServices::new(
            Repositories {
                users: users.clone(),
                product_writes: products.clone(),
                product_reads: products.clone(),
                category_writes: categories.clone(),
                category_reads: categories.clone(),
                enquiry_writes: enquiries.clone(),
                enquiry_reads: enquiries.clone(),
                testimonials: testimonials.clone(),
            },
            Ports {
                password_hasher: Arc::new(DummyPasswordHasher),
                token_manager: Arc::new(DummyTokenManager),
                clock: Arc::new(FixedClock),
                slugger: Arc::new(DefaultSlugGenerator),
                references: Arc::new(self.references),
                mailer: mailer.clone(),
            },
            self.settings,
        ));

        TestApp {
            services,
            users,
            products,
            categories,
            enquiries,
            testimonials,
            mailer,
        }
    }
}

impl TestApp {
    pub fn builder() -> TestAppBuilder {
        TestAppBuilder {
            categories: InMemoryCategories::default(),
            mailer: RecordingEmailDispatcher::default(),
            references: SequenceReferences::default(),
            settings: ServiceSettings {
                company: CompanyProfile {
                    name: "Acme Foods".into(),
                    email: "sales@acme.example".into(),
                    phone: "+91 00000 00000".into(),
                    address: "1 Market Road".into(),
                },
                ..ServiceSettings::default()
            },
        }
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn router(&self) -> axum::Router {
        build_router(
            HttpState {
                services: Arc::clone(&self.services),
            },
            &[],
        )
    }
}

pub async fn make_test_router() -> axum::Router {
    TestApp::new().router()
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let (_, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response carries the error envelope with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(resp).await;
    assert_eq!(json["success"], Value::Bool(false));
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message in error envelope");
}
