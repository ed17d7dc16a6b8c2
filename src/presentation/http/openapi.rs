// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub success: bool,
    pub status: String,
}

/// Successful responses carrying data are wrapped as `{"success": true, "data": <schema>}`.
#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::profile,
        crate::presentation::http::controllers::products::list_products,
        crate::presentation::http::controllers::products::get_product,
        crate::presentation::http::controllers::products::create_product,
        crate::presentation::http::controllers::products::update_product,
        crate::presentation::http::controllers::products::delete_product,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::get_category,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::update_category,
        crate::presentation::http::controllers::categories::delete_category,
        crate::presentation::http::controllers::enquiries::list_enquiries,
        crate::presentation::http::controllers::enquiries::get_enquiry,
        crate::presentation::http::controllers::enquiries::submit_enquiry,
        crate::presentation::http::controllers::enquiries::update_enquiry,
        crate::presentation::http::controllers::enquiries::reply_to_enquiry,
        crate::presentation::http::controllers::enquiries::delete_enquiry,
        crate::presentation::http::controllers::testimonials::list_testimonials,
        crate::presentation::http::controllers::testimonials::get_testimonial,
        crate::presentation::http::controllers::testimonials::create_testimonial,
        crate::presentation::http::controllers::testimonials::update_testimonial,
        crate::presentation::http::controllers::testimonials::delete_testimonial
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::response::MessageResponse,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::products::CreateProductRequest,
            crate::presentation::http::controllers::products::UpdateProductRequest,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::presentation::http::controllers::categories::UpdateCategoryRequest,
            crate::presentation::http::controllers::enquiries::SubmitEnquiryRequest,
            crate::presentation::http::controllers::enquiries::EnquiryItemRequest,
            crate::presentation::http::controllers::enquiries::UpdateEnquiryRequest,
            crate::presentation::http::controllers::enquiries::ReplyRequest,
            crate::presentation::http::controllers::enquiries::AttachmentRequest,
            crate::presentation::http::controllers::testimonials::CreateTestimonialRequest,
            crate::presentation::http::controllers::testimonials::UpdateTestimonialRequest,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::ProductDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::EnquiryDto,
            crate::application::dto::EnquiryItemDto,
            crate::application::dto::TestimonialDto,
            crate::domain::product::ProductCategory,
            crate::domain::product::ProductImage,
            crate::domain::enquiry::EnquiryStatus,
            crate::domain::user::Role
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and profile"),
        (name = "Products", description = "Product catalogue"),
        (name = "Categories", description = "Category management"),
        (name = "Enquiries", description = "Customer enquiries and replies"),
        (name = "Testimonials", description = "Customer testimonials"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Directory API",
        description = "Business-directory backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:5002".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

/// `/openapi.json`, Swagger UI under `/docs`, and a redirect from `/`.
pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
