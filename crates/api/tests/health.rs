//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, TestStore};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health reports a readable store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let store = TestStore::seeded();
    let response = get(store.app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["store_readable"], true);
}

// ---------------------------------------------------------------------------
// Test: GET /health is degraded (not failing) without a document
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_degraded_when_store_missing() {
    let store = TestStore::empty();
    let response = get(store.app(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store_readable"], false);
}

// ---------------------------------------------------------------------------
// Test: GET requests are counted across the shared state
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_requests_are_counted() {
    let store = TestStore::seeded();
    let app = store.app();

    get(app.clone(), "/films").await;
    get(app.clone(), "/films/1").await;
    common::post_json(
        app.clone(),
        "/films",
        serde_json::json!({"title": "X", "director": "Y", "duration": 1}),
    )
    .await;

    let json = body_json(get(app, "/health").await).await;
    // Two film GETs plus the health request itself; the POST is not counted.
    assert_eq!(json["get_requests"], 3);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let store = TestStore::seeded();
    let response = get(store.app(), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let store = TestStore::seeded();
    let response = get(store.app(), "/films").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let store = TestStore::seeded();

    // CORS preflight requires custom headers, so we build the request manually.
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/films")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PATCH")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = store.app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();

    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("PATCH"),
        "Allow-Methods should contain PATCH, got: {allow_methods}"
    );
}
