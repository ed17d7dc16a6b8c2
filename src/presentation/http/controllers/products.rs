// src/presentation/http/controllers/products.rs
use crate::application::{
    commands::products::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand},
    dto::ProductDto,
};
use crate::domain::product::{ProductCategory, ProductImage};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::response::{self, Envelope};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    /// Restrict the listing to one category.
    pub category: Option<ProductCategory>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub category: ProductCategory,
    pub weight_per_piece: f64,
    pub pieces_per_kg: f64,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub currency: Option<String>,
    pub stock: Option<i64>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<ProductCategory>,
    pub weight_per_piece: Option<f64>,
    pub pieces_per_kg: Option<f64>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    pub currency: Option<String>,
    pub stock: Option<i64>,
    pub images: Option<Vec<ProductImage>>,
    pub is_active: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductListParams),
    responses(
        (status = 200, description = "Active products, newest first.", body = [ProductDto])
    ),
    tag = "Products"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ProductListParams>,
) -> HttpResult<Json<Envelope<Vec<ProductDto>>>> {
    state
        .services
        .product_queries
        .list_products(params.category)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    get,
    path = "/api/products/{slug}",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product found.", body = ProductDto),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<Envelope<ProductDto>>> {
    state
        .services
        .product_queries
        .get_product_by_slug(&slug)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created.", body = ProductDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "No free slug could be assigned.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Products"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<CreateProductRequest>,
) -> HttpResult<(StatusCode, Json<Envelope<ProductDto>>)> {
    let command = CreateProductCommand {
        name: payload.name,
        description: payload.description,
        category: payload.category,
        weight_per_piece: payload.weight_per_piece,
        pieces_per_kg: payload.pieces_per_kg,
        price: payload.price,
        currency: payload.currency,
        stock: payload.stock,
        images: payload.images,
    };

    state
        .services
        .product_commands
        .create_product(&user, command)
        .await
        .into_http()
        .map(response::created)
}

#[utoipa::path(
    put,
    path = "/api/products/{slug}",
    params(("slug" = String, Path, description = "Current product slug")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated. A rename re-derives the slug.", body = ProductDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug conflict.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Products"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    JsonBody(payload): JsonBody<UpdateProductRequest>,
) -> HttpResult<Json<Envelope<ProductDto>>> {
    let command = UpdateProductCommand {
        slug,
        name: payload.name,
        description: payload.description,
        category: payload.category,
        weight_per_piece: payload.weight_per_piece,
        pieces_per_kg: payload.pieces_per_kg,
        price: payload.price,
        currency: payload.currency,
        stock: payload.stock,
        images: payload.images,
        is_active: payload.is_active,
    };

    state
        .services
        .product_commands
        .update_product(&user, command)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    delete,
    path = "/api/products/{slug}",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product deactivated.", body = ProductDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<Envelope<ProductDto>>> {
    state
        .services
        .product_commands
        .delete_product(&user, DeleteProductCommand { slug })
        .await
        .into_http()
        .map(response::ok)
}
