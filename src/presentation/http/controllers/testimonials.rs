// src/presentation/http/controllers/testimonials.rs
use crate::application::{
    commands::testimonials::{
        CreateTestimonialCommand, DeleteTestimonialCommand, UpdateTestimonialCommand,
    },
    dto::TestimonialDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::response::{self, Envelope};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonialRequest {
    pub testimonial: String,
    pub by: String,
    pub img_src: String,
    pub order: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonialRequest {
    pub testimonial: Option<String>,
    pub by: Option<String>,
    pub img_src: Option<String>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/testimonials",
    responses(
        (status = 200, description = "Active testimonials in display order.", body = [TestimonialDto])
    ),
    tag = "Testimonials"
)]
pub async fn list_testimonials(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Envelope<Vec<TestimonialDto>>>> {
    state
        .services
        .testimonial_queries
        .list_testimonials()
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    get,
    path = "/api/testimonials/{id}",
    params(("id" = i64, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Testimonial found.", body = TestimonialDto),
        (status = 404, description = "Unknown id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Testimonials"
)]
pub async fn get_testimonial(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Envelope<TestimonialDto>>> {
    state
        .services
        .testimonial_queries
        .get_testimonial(id)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    post,
    path = "/api/testimonials",
    request_body = CreateTestimonialRequest,
    responses(
        (status = 201, description = "Testimonial created.", body = TestimonialDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Testimonials"
)]
pub async fn create_testimonial(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<CreateTestimonialRequest>,
) -> HttpResult<(StatusCode, Json<Envelope<TestimonialDto>>)> {
    let command = CreateTestimonialCommand {
        testimonial: payload.testimonial,
        by: payload.by,
        img_src: payload.img_src,
        order: payload.order,
    };

    state
        .services
        .testimonial_commands
        .create_testimonial(&user, command)
        .await
        .into_http()
        .map(response::created)
}

#[utoipa::path(
    put,
    path = "/api/testimonials/{id}",
    params(("id" = i64, Path, description = "Testimonial id")),
    request_body = UpdateTestimonialRequest,
    responses(
        (status = 200, description = "Testimonial updated.", body = TestimonialDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Testimonials"
)]
pub async fn update_testimonial(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<UpdateTestimonialRequest>,
) -> HttpResult<Json<Envelope<TestimonialDto>>> {
    let command = UpdateTestimonialCommand {
        id,
        testimonial: payload.testimonial,
        by: payload.by,
        img_src: payload.img_src,
        is_active: payload.is_active,
        order: payload.order,
    };

    state
        .services
        .testimonial_commands
        .update_testimonial(&user, command)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    delete,
    path = "/api/testimonials/{id}",
    params(("id" = i64, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Testimonial hidden.", body = TestimonialDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Testimonials"
)]
pub async fn delete_testimonial(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<Envelope<TestimonialDto>>> {
    state
        .services
        .testimonial_commands
        .delete_testimonial(&user, DeleteTestimonialCommand { id })
        .await
        .into_http()
        .map(response::ok)
}
