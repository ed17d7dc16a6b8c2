// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;

use support::{
    ADMIN_TOKEN, EnquiryBuilder, ProductBuilder, TestApp, USER_TOKEN, assert_error_response,
    body_json,
};

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn product_body(name: &str) -> Value {
    json!({
        "name": name,
        "category": "Seafood",
        "weightPerPiece": 250.0,
        "piecesPerKg": 4.0,
        "price": 450.5,
        "stock": 20
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let app = support::make_test_router().await;

    let resp = app.oneshot(get("/api/health", None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["success"], Value::Bool(true));
    assert_eq!(json["status"], "ok");

    let direct = directory_core::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}

#[tokio::test]
async fn listing_enquiries_without_token_is_401() {
    let app = support::make_test_router().await;

    let resp = app.oneshot(get("/api/enquiries", None)).await.unwrap();

    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn invalid_token_is_401() {
    let app = support::make_test_router().await;

    let resp = app
        .oneshot(get("/api/enquiries", Some("bad-token")))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn public_submission_returns_201() {
    let test_app = TestApp::new();
    test_app
        .products
        .seed(ProductBuilder::new(1, "sea-bass").price(Decimal::new(300, 0)).build());
    let app = test_app.router();

    let resp = app
        .oneshot(send_json(
            "POST",
            "/api/enquiries",
            None,
            json!({
                "customerName": "Ravi",
                "customerEmail": "ravi@example.com",
                "customerPhone": "+91 98765 43210",
                "items": [
                    { "productSlug": "sea-bass", "quantity": 3 },
                    { "productSlug": "unknown", "quantity": 1 }
                ]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    assert_eq!(json["success"], Value::Bool(true));
    assert_eq!(json["data"]["status"], "new");
    assert_eq!(json["data"]["totalValue"], json!(900.0));
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 1);
    assert!(json["data"]["slug"].as_str().unwrap().starts_with("enq-"));
}

#[tokio::test]
async fn submission_without_contact_is_400() {
    let app = support::make_test_router().await;

    let resp = app
        .oneshot(send_json(
            "POST",
            "/api/enquiries",
            None,
            json!({ "items": [{ "productSlug": "sea-bass", "quantity": 1 }] }),
        ))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn item_without_quantity_is_422_envelope() {
    let app = support::make_test_router().await;

    let resp = app
        .oneshot(send_json(
            "POST",
            "/api/enquiries",
            None,
            json!({
                "customerName": "Ravi",
                "customerEmail": "ravi@example.com",
                "items": [{ "productSlug": "sea-bass" }]
            }),
        ))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity").await;
}

#[tokio::test]
async fn malformed_json_is_400_envelope() {
    let app = support::make_test_router().await;
    let req = Request::builder()
        .method("POST")
        .uri("/api/enquiries")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"customerName\": "))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();

    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn wrong_content_type_is_415_envelope() {
    let app = support::make_test_router().await;
    let req = Request::builder()
        .method("POST")
        .uri("/api/categories")
        .header(AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}"))
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from("Seafood"))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();

    assert_error_response(
        resp,
        StatusCode::UNSUPPORTED_MEDIA_TYPE,
        "Unsupported Media Type",
    )
    .await;
}

#[tokio::test]
async fn blank_item_slug_is_dropped_not_rejected() {
    let test_app = TestApp::new();
    test_app
        .products
        .seed(ProductBuilder::new(1, "sea-bass").price(Decimal::new(100, 0)).build());
    let app = test_app.router();

    let resp = app
        .oneshot(send_json(
            "POST",
            "/api/enquiries",
            None,
            json!({
                "customerName": "Ravi",
                "customerEmail": "ravi@example.com",
                "items": [
                    { "productSlug": "sea-bass", "quantity": 2 },
                    { "productSlug": "", "quantity": 1 }
                ]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["totalValue"], json!(200.0));
}

#[tokio::test]
async fn admin_creates_product() {
    let app = support::make_test_router().await;

    let resp = app
        .oneshot(send_json(
            "POST",
            "/api/products",
            Some(ADMIN_TOKEN),
            product_body("King Prawns"),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["slug"], "king-prawns");
    assert_eq!(json["data"]["price"], json!(450.5));
    assert_eq!(json["data"]["currency"], "INR");
    assert_eq!(json["data"]["isActive"], Value::Bool(true));
}

#[tokio::test]
async fn plain_user_cannot_create_product() {
    let app = support::make_test_router().await;

    let resp = app
        .oneshot(send_json(
            "POST",
            "/api/products",
            Some(USER_TOKEN),
            product_body("King Prawns"),
        ))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
}

#[tokio::test]
async fn unknown_product_is_404() {
    let app = support::make_test_router().await;

    let resp = app
        .oneshot(get("/api/products/not-here", None))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn deleted_product_leaves_listing_but_stays_readable() {
    let test_app = TestApp::new();
    test_app.products.seed(ProductBuilder::new(1, "sea-bass").build());
    let app = test_app.router();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/products/sea-bass")
                .header(AUTHORIZATION, format!("Bearer {ADMIN_TOKEN}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["data"]["isActive"], Value::Bool(false));

    let list = body_json(app.clone().oneshot(get("/api/products", None)).await.unwrap()).await;
    assert!(list["data"].as_array().unwrap().is_empty());

    let single = app.oneshot(get("/api/products/sea-bass", None)).await.unwrap();
    assert_eq!(single.status(), StatusCode::OK);
}

#[tokio::test]
async fn duplicate_category_is_409() {
    let app = support::make_test_router().await;
    let body = json!({ "name": "Seafood" });

    let first = app
        .clone()
        .oneshot(send_json("POST", "/api/categories", Some(ADMIN_TOKEN), body.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(send_json("POST", "/api/categories", Some(ADMIN_TOKEN), body))
        .await
        .unwrap();
    assert_error_response(second, StatusCode::CONFLICT, "Conflict").await;
}

#[tokio::test]
async fn reply_with_broken_relay_is_502() {
    let test_app = TestApp::builder()
        .mailer(support::RecordingEmailDispatcher::failing())
        .build();
    test_app.enquiries.seed(EnquiryBuilder::new(1, "enq-abc").build());
    let app = test_app.router();

    let resp = app
        .oneshot(send_json(
            "POST",
            "/api/enquiries/enq-abc/reply",
            Some(ADMIN_TOKEN),
            json!({ "message": "Thanks for asking" }),
        ))
        .await
        .unwrap();

    assert_error_response(resp, StatusCode::BAD_GATEWAY, "Bad Gateway").await;
}

#[tokio::test]
async fn reply_returns_message_envelope() {
    let test_app = TestApp::new();
    test_app.enquiries.seed(EnquiryBuilder::new(1, "enq-abc").build());
    let app = test_app.router();

    let resp = app
        .oneshot(send_json(
            "POST",
            "/api/enquiries/enq-abc/reply",
            Some(ADMIN_TOKEN),
            json!({ "message": "Thanks for asking" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["success"], Value::Bool(true));
    assert_eq!(json["message"], "Reply sent");
    assert_eq!(test_app.mailer.sent().len(), 1);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = support::make_test_router().await;

    let resp = app.oneshot(get("/openapi.json", None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert!(json["paths"]["/api/enquiries"].is_object());
}

#[tokio::test]
async fn enquiry_detail_embeds_product() {
    let test_app = TestApp::new();
    test_app.products.seed(ProductBuilder::new(1, "sea-bass").build());
    test_app.enquiries.seed(
        EnquiryBuilder::new(1, "enq-abc")
            .item(Some("sea-bass"), Some(1), 2)
            .item(Some("gone"), Some(42), 1)
            .build(),
    );
    let app = test_app.router();

    let resp = app
        .oneshot(get("/api/enquiries/enq-abc", Some(ADMIN_TOKEN)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["data"]["items"][0]["product"]["slug"], "sea-bass");
    assert!(json["data"]["items"][1].get("product").is_none());
}
