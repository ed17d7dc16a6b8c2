// src/presentation/http/controllers/enquiries.rs
use crate::application::{
    commands::enquiries::{
        DeleteEnquiryCommand, ReplyAttachment, ReplyToEnquiryCommand, SubmitEnquiryCommand,
        SubmittedItem, UpdateEnquiryCommand,
    },
    dto::EnquiryDto,
};
use crate::domain::enquiry::EnquiryStatus;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::response::{self, Envelope, MessageResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryItemRequest {
    #[serde(default)]
    pub product_slug: String,
    pub quantity: i64,
}

/// Missing contact fields deserialize as empty strings and fail validation.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEnquiryRequest {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    pub company_name: Option<String>,
    #[serde(default)]
    pub items: Vec<EnquiryItemRequest>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnquiryRequest {
    pub status: Option<EnquiryStatus>,
    pub admin_notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AttachmentRequest {
    pub filename: String,
    pub url: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplyRequest {
    pub message: String,
    #[serde(default)]
    pub attachments: Vec<AttachmentRequest>,
}

#[utoipa::path(
    get,
    path = "/api/enquiries",
    responses(
        (status = 200, description = "All enquiries, newest first.", body = [EnquiryDto]),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Forbidden.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Enquiries"
)]
pub async fn list_enquiries(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Envelope<Vec<EnquiryDto>>>> {
    state
        .services
        .enquiry_queries
        .list_enquiries(&user)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    get,
    path = "/api/enquiries/{slug}",
    params(("slug" = String, Path, description = "Enquiry reference")),
    responses(
        (status = 200, description = "Enquiry found.", body = EnquiryDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown reference.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Enquiries"
)]
pub async fn get_enquiry(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<Envelope<EnquiryDto>>> {
    state
        .services
        .enquiry_queries
        .get_enquiry(&user, &slug)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    post,
    path = "/api/enquiries",
    request_body = SubmitEnquiryRequest,
    responses(
        (status = 201, description = "Enquiry recorded with a fresh reference.", body = EnquiryDto),
        (status = 400, description = "Missing contact details, invalid items or malformed JSON.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Body does not match the request schema.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Enquiries"
)]
pub async fn submit_enquiry(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<SubmitEnquiryRequest>,
) -> HttpResult<(StatusCode, Json<Envelope<EnquiryDto>>)> {
    let command = SubmitEnquiryCommand {
        customer_name: payload.customer_name,
        customer_email: payload.customer_email,
        customer_phone: payload.customer_phone,
        company_name: payload.company_name,
        items: payload
            .items
            .into_iter()
            .map(|item| SubmittedItem {
                product_slug: item.product_slug,
                quantity: item.quantity,
            })
            .collect(),
        message: payload.message,
    };

    state
        .services
        .enquiry_commands
        .submit_enquiry(command)
        .await
        .into_http()
        .map(response::created)
}

#[utoipa::path(
    put,
    path = "/api/enquiries/{slug}",
    params(("slug" = String, Path, description = "Enquiry reference")),
    request_body = UpdateEnquiryRequest,
    responses(
        (status = 200, description = "Enquiry updated.", body = EnquiryDto),
        (status = 400, description = "Nothing to update.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown reference.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Enquiries"
)]
pub async fn update_enquiry(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    JsonBody(payload): JsonBody<UpdateEnquiryRequest>,
) -> HttpResult<Json<Envelope<EnquiryDto>>> {
    let command = UpdateEnquiryCommand {
        slug,
        status: payload.status,
        admin_notes: payload.admin_notes,
    };

    state
        .services
        .enquiry_commands
        .update_enquiry(&user, command)
        .await
        .into_http()
        .map(response::ok)
}

#[utoipa::path(
    post,
    path = "/api/enquiries/{slug}/reply",
    params(("slug" = String, Path, description = "Enquiry reference")),
    request_body = ReplyRequest,
    responses(
        (status = 200, description = "Reply sent and enquiry marked as contacted.", body = MessageResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown reference.", body = crate::presentation::http::error::ErrorResponse),
        (status = 502, description = "Mail delivery failed; status unchanged.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Enquiries"
)]
pub async fn reply_to_enquiry(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    JsonBody(payload): JsonBody<ReplyRequest>,
) -> HttpResult<Json<MessageResponse>> {
    let command = ReplyToEnquiryCommand {
        slug,
        message: payload.message,
        attachments: payload
            .attachments
            .into_iter()
            .map(|attachment| ReplyAttachment {
                filename: attachment.filename,
                url: attachment.url,
            })
            .collect(),
    };

    state
        .services
        .enquiry_commands
        .reply_to_enquiry(&user, command)
        .await
        .into_http()?;

    Ok(response::message("Reply sent"))
}

#[utoipa::path(
    delete,
    path = "/api/enquiries/{slug}",
    params(("slug" = String, Path, description = "Enquiry reference")),
    responses(
        (status = 200, description = "Enquiry deleted.", body = MessageResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown reference.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Enquiries"
)]
pub async fn delete_enquiry(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .enquiry_commands
        .delete_enquiry(&user, DeleteEnquiryCommand { slug })
        .await
        .into_http()?;

    Ok(response::message("Enquiry deleted"))
}
