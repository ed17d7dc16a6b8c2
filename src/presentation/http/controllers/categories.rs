// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand},
    dto::CategoryDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::response::{self, Envelope, MessageResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Active categories sorted by name.", body = [CategoryDto])
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Envelope<Vec<CategoryDto>>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    get,
    path = "/api/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category found.", body = CategoryDto),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<Envelope<CategoryDto>>> {
    state
        .services
        .category_queries
        .get_category_by_slug(&slug)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 400, description = "Invalid name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name already used.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<Envelope<CategoryDto>>)> {
    state
        .services
        .category_commands
        .create_category(&user, CreateCategoryCommand { name: payload.name })
        .await
        .into_http()
        .map(response::created)
}

#[utoipa::path(
    put,
    path = "/api/categories/{slug}",
    params(("slug" = String, Path, description = "Current category slug")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated.", body = CategoryDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name already used.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    JsonBody(payload): JsonBody<UpdateCategoryRequest>,
) -> HttpResult<Json<Envelope<CategoryDto>>> {
    let command = UpdateCategoryCommand {
        slug,
        name: payload.name,
        is_active: payload.is_active,
    };

    state
        .services
        .category_commands
        .update_category(&user, command)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    delete,
    path = "/api/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category deleted.", body = MessageResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Categories"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .category_commands
        .delete_category(&user, DeleteCategoryCommand { slug })
        .await
        .into_http()?;

    Ok(response::message("Category deleted"))
}
