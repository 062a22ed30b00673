//! Router-level tests for routing, authentication extraction, and filter
//! validation -- everything that resolves before the database is touched.

mod common;

use axum::http::StatusCode;

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app();
    let response = common::get(app, "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Authentication extraction
// ---------------------------------------------------------------------------

#[tokio::test]
async fn profile_without_token_returns_401() {
    let app = common::build_test_app();
    let response = common::get(app, "/api/v1/profile").await;
    common::assert_error(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

#[tokio::test]
async fn malformed_authorization_header_returns_401() {
    let app = common::build_test_app();
    let response = common::get_with_auth(app, "/api/v1/profile", "Token abc123").await;
    common::assert_error(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

#[tokio::test]
async fn garbage_bearer_token_returns_401() {
    let app = common::build_test_app();
    let response = common::get_with_auth(app, "/api/v1/profile", "Bearer not.a.jwt").await;
    common::assert_error(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

#[tokio::test]
async fn movie_detail_with_invalid_token_returns_401() {
    // Detail allows anonymous callers through to the policy evaluator, but
    // a token that is present and invalid is still rejected up front.
    let app = common::build_test_app();
    let response = common::get_with_auth(app, "/api/v1/movies/1", "Bearer invalid").await;
    common::assert_error(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

#[tokio::test]
async fn rating_creation_requires_authentication() {
    let app = common::build_test_app();
    let response = common::post_json(
        app,
        "/api/v1/ratings",
        r#"{"movie_id": 1, "stars": 8, "text": "great"}"#,
    )
    .await;
    common::assert_error(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

#[tokio::test]
async fn logout_requires_authentication() {
    let app = common::build_test_app();
    let response = common::post_json(
        app,
        "/api/v1/auth/logout",
        r#"{"refresh_token": "whatever"}"#,
    )
    .await;
    common::assert_error(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}

// ---------------------------------------------------------------------------
// Filter validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_ordering_field_returns_400() {
    let app = common::build_test_app();
    let response = common::get(app, "/api/v1/movies?ordering=name").await;
    common::assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn unknown_status_filter_returns_400() {
    let app = common::build_test_app();
    let response = common::get(app, "/api/v1/movies?status=premium").await;
    common::assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}
