//! End-to-end API integration tests
//!
//! These tests verify the complete HTTP flows including:
//! - User creation, duplicate rejection, and profile updates
//! - Team admission and lookups from both sides of the relationship
//! - Asset CRUD, filtered listings, and the stock request flow
//! - JWT issuance and bearer-token gating on protected endpoints
//!
//! The router runs over in-memory repositories and a mock payment gateway,
//! so no external services are required.

use std::sync::Arc;

use assetdesk_api::api::routes::create_router;
use assetdesk_api::auth::jwt::{create_token, verify_token};
use assetdesk_api::infrastructure::repositories::{
    InMemoryAssetRepository, InMemoryTeamRepository, InMemoryUserRepository,
};
use assetdesk_api::payments::{PaymentError, PaymentGateway};
use assetdesk_api::state::AppState;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for oneshot

const TEST_SECRET: &str = "integration-test-secret";

/// Gateway double that echoes the forwarded amount in its client secret
struct MockPaymentGateway;

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_intent(
        &self,
        amount_minor: i64,
        _currency: &str,
    ) -> Result<String, PaymentError> {
        Ok(format!("pi_test_secret_{}", amount_minor))
    }
}

/// Setup test application over fresh in-memory stores
fn setup_app() -> Router {
    let state = AppState {
        users: Arc::new(InMemoryUserRepository::new()),
        teams: Arc::new(InMemoryTeamRepository::new()),
        assets: Arc::new(InMemoryAssetRepository::new()),
        payments: Arc::new(MockPaymentGateway),
        jwt_secret: TEST_SECRET.to_string(),
    };

    create_router(state)
}

/// Send a request and return the status with the parsed JSON body
async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

fn inserted_id(body: &Value) -> String {
    body["insertedId"]["$oid"]
        .as_str()
        .expect("insertedId in response")
        .to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_create_user_then_duplicate_conflicts() {
    let app = setup_app();

    let payload = json!({ "email": "ada@example.com", "name": "Ada" });

    let (status, body) = request(&app, "POST", "/users", None, Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["acknowledged"].as_bool().unwrap());
    assert!(!inserted_id(&body).is_empty());

    let (status, body) = request(&app, "POST", "/users", None, Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].as_str().unwrap().contains("ada@example.com"));

    // Exactly one document for the email
    let token = create_token("ada@example.com", TEST_SECRET).unwrap();
    let (status, body) = request(&app, "GET", "/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_user_requires_email() {
    let app = setup_app();

    let (status, body) = request(&app, "POST", "/users", None, Some(json!({ "name": "Nobody" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_list_users_rejects_missing_or_bad_token() {
    let app = setup_app();

    let (status, body) = request(&app, "GET", "/users", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["message"].is_string());

    let (status, _) = request(&app, "GET", "/users", Some("not.a.token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let foreign = create_token("ada@example.com", "some-other-secret").unwrap();
    let (status, _) = request(&app, "GET", "/users", Some(&foreign), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_user_by_email() {
    let app = setup_app();

    request(
        &app,
        "POST",
        "/users",
        None,
        Some(json!({ "email": "grace@example.com", "name": "Grace" })),
    )
    .await;

    let (status, body) = request(&app, "GET", "/user/grace@example.com", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "grace@example.com");
    assert_eq!(body["name"], "Grace");

    let (status, _) = request(&app, "GET", "/user/missing@example.com", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_update_flows() {
    let app = setup_app();

    let (_, body) = request(
        &app,
        "POST",
        "/users",
        None,
        Some(json!({ "email": "lin@example.com", "name": "Lin" })),
    )
    .await;
    let id = inserted_id(&body);

    // Open profile update
    let (status, body) = request(
        &app,
        "PUT",
        &format!("/update-profile/{}", id),
        None,
        Some(json!({ "name": "Lin Z.", "companyName": "Acme" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchedCount"], 1);
    assert_eq!(body["modifiedCount"], 1);

    // Token-gated patch
    let (status, _) = request(
        &app,
        "PATCH",
        &format!("/user/update/{}", id),
        None,
        Some(json!({ "workAt": "hr@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = create_token("lin@example.com", TEST_SECRET).unwrap();
    let (status, _) = request(
        &app,
        "PATCH",
        &format!("/user/update/{}", id),
        Some(&token),
        Some(json!({ "workAt": "hr@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = request(&app, "GET", "/user/lin@example.com", None, None).await;
    assert_eq!(body["name"], "Lin Z.");
    assert_eq!(body["companyName"], "Acme");
    assert_eq!(body["workAt"], "hr@example.com");
}

#[tokio::test]
async fn test_jwt_issuance() {
    let app = setup_app();

    let (status, body) = request(
        &app,
        "POST",
        "/jwt",
        None,
        Some(json!({ "email": "ada@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let token = body["token"].as_str().unwrap();
    let claims = verify_token(token, TEST_SECRET).expect("issued token verifies");
    assert_eq!(claims.sub, "ada@example.com");

    let (status, _) = request(&app, "POST", "/jwt", None, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_team_admission_rules() {
    let app = setup_app();

    let (status, _) = request(
        &app,
        "POST",
        "/team",
        None,
        Some(json!({
            "email": "worker@example.com",
            "name": "Worker",
            "role": "employee",
            "userEmail": "hr@example.com",
            "workAt": "Acme"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Non-employee roles are rejected and nothing is stored
    let (status, _) = request(
        &app,
        "POST",
        "/team",
        None,
        Some(json!({
            "email": "boss@example.com",
            "role": "hr",
            "userEmail": "hr@example.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = request(&app, "GET", "/team/hr@example.com", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_team_lookups_and_removal() {
    let app = setup_app();

    for member in ["one@example.com", "two@example.com"] {
        request(
            &app,
            "POST",
            "/team",
            None,
            Some(json!({
                "email": member,
                "role": "employee",
                "userEmail": "hr@example.com",
                "workAt": "Acme"
            })),
        )
        .await;
    }

    // Colleague listing resolves the member's employer first
    let (status, body) = request(&app, "GET", "/myTeam/one@example.com", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = request(&app, "GET", "/myTeam/stranger@example.com", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, body) = request(&app, "GET", "/hrEmail/two@example.com", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userEmail"], "hr@example.com");

    let (status, _) = request(&app, "GET", "/hrEmail/stranger@example.com", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let id = body_id(&request(&app, "GET", "/hrEmail/two@example.com", None, None).await.1);
    let (status, body) = request(&app, "DELETE", &format!("/team/{}", id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 1);

    let (_, body) = request(&app, "GET", "/team/hr@example.com", None, None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

fn body_id(body: &Value) -> String {
    body["_id"]["$oid"].as_str().expect("_id in document").to_string()
}

#[tokio::test]
async fn test_asset_lifecycle() {
    let app = setup_app();

    let (status, body) = request(
        &app,
        "POST",
        "/asset",
        None,
        Some(json!({ "assetName": "Laptop", "category": "electronics", "quantity": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = inserted_id(&body);

    let (status, body) = request(&app, "GET", &format!("/asset/{}", id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assetName"], "Laptop");
    assert_eq!(body["category"], "electronics");
    assert_eq!(body["quantity"], 5);

    let (status, body) = request(&app, "DELETE", &format!("/asset/{}", id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 1);

    let (status, _) = request(&app, "GET", &format!("/asset/{}", id), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_asset_listing_filters() {
    let app = setup_app();

    let seed = [
        ("Laptop", "electronics", 5),
        ("Laptop stand", "furniture", 0),
        ("Keyboard", "electronics", 2),
        ("Chair", "furniture", 7),
    ];
    for (name, category, quantity) in seed {
        request(
            &app,
            "POST",
            "/asset",
            None,
            Some(json!({ "assetName": name, "category": category, "quantity": quantity })),
        )
        .await;
    }

    // Stock statuses partition the collection
    let (_, available) = request(&app, "GET", "/assets?stockStatus=available", None, None).await;
    let (_, out_of_stock) =
        request(&app, "GET", "/assets?stockStatus=out-of-stock", None, None).await;
    let available = available.as_array().unwrap();
    let out_of_stock = out_of_stock.as_array().unwrap();

    assert_eq!(available.len() + out_of_stock.len(), seed.len());
    assert!(available.iter().all(|a| a["quantity"].as_i64().unwrap() > 0));
    assert!(out_of_stock
        .iter()
        .all(|a| a["quantity"].as_i64().unwrap() == 0));

    // Case-insensitive substring search on the name
    let (_, found) = request(&app, "GET", "/assets?search=lap", None, None).await;
    assert_eq!(found.as_array().unwrap().len(), 2);

    // Category equality
    let (_, electronics) = request(&app, "GET", "/assets?category=electronics", None, None).await;
    assert_eq!(electronics.as_array().unwrap().len(), 2);

    // Quantity ordering
    let (_, sorted) = request(&app, "GET", "/assets?sortOrder=high-to-low", None, None).await;
    let quantities: Vec<i64> = sorted
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["quantity"].as_i64().unwrap())
        .collect();
    assert!(quantities.windows(2).all(|w| w[0] >= w[1]));

    let (_, sorted) = request(&app, "GET", "/assets?sortOrder=low-to-high", None, None).await;
    let quantities: Vec<i64> = sorted
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["quantity"].as_i64().unwrap())
        .collect();
    assert!(quantities.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_request_asset_clamps_at_zero() {
    let app = setup_app();

    let (_, body) = request(
        &app,
        "POST",
        "/asset",
        None,
        Some(json!({ "assetName": "Monitor", "category": "electronics", "quantity": 1 })),
    )
    .await;
    let id = inserted_id(&body);

    let (status, body) = request(&app, "POST", &format!("/request-asset/{}", id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modifiedCount"], 1);

    let (_, body) = request(&app, "GET", &format!("/asset/{}", id), None, None).await;
    assert_eq!(body["quantity"], 0);

    // Requesting at zero is a reported no-op, never a negative quantity
    let (status, body) = request(&app, "POST", &format!("/request-asset/{}", id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modifiedCount"], 0);

    let (_, body) = request(&app, "GET", &format!("/asset/{}", id), None, None).await;
    assert_eq!(body["quantity"], 0);
}

#[tokio::test]
async fn test_request_asset_missing_and_invalid_ids() {
    let app = setup_app();

    let absent = mongodb::bson::oid::ObjectId::new();
    let (status, _) = request(
        &app,
        "POST",
        &format!("/request-asset/{}", absent),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = request(&app, "POST", "/request-asset/not-an-id", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("Invalid id"));
}

#[tokio::test]
async fn test_request_update_merges_fields() {
    let app = setup_app();

    let (_, body) = request(
        &app,
        "POST",
        "/asset",
        None,
        Some(json!({ "assetName": "Desk", "category": "furniture", "quantity": 3 })),
    )
    .await;
    let id = inserted_id(&body);

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/request-update/{}", id),
        None,
        Some(json!({ "quantity": 10, "productType": "returnable" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchedCount"], 1);

    let (_, body) = request(&app, "GET", &format!("/asset/{}", id), None, None).await;
    assert_eq!(body["quantity"], 10);
    assert_eq!(body["productType"], "returnable");
    assert_eq!(body["assetName"], "Desk");
}

#[tokio::test]
async fn test_create_payment_intent() {
    let app = setup_app();

    let (status, body) = request(
        &app,
        "POST",
        "/create-payment-intent",
        None,
        Some(json!({ "price": 12.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clientSecret"], "pi_test_secret_1250");

    let (status, _) = request(&app, "POST", "/create-payment-intent", None, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(
        &app,
        "POST",
        "/create-payment-intent",
        None,
        Some(json!({ "price": -4.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
