//! Dentist API Tests
//!
//! Exercises the request-validation surface of the dentist routes. The
//! registration uniqueness rule itself is covered by the service unit tests
//! against a mocked repository.

use axum::http::StatusCode;

use crate::common::TestApp;

#[tokio::test]
async fn test_get_dentist_with_malformed_id_returns_400() {
    let app = TestApp::new();

    let response = app.get("/dentists/id/not-a-number").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_dentist_with_malformed_json_returns_422() {
    let app = TestApp::new();

    let response = app.post_json("/dentists", "surname=Smith").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_dentist_with_missing_registration_returns_422() {
    let app = TestApp::new();

    let response = app
        .post_json("/dentists", r#"{"surname":"Smith","name":"John"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_dentist_with_empty_registration_returns_422() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/dentists",
            r#"{"surname":"Smith","name":"John","registration":""}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_dentist_with_malformed_id_returns_400() {
    let app = TestApp::new();

    let response = app
        .put_json(
            "/dentists/abc",
            r#"{"surname":"Smith","name":"John","registration":"MP-123"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_dentist_with_malformed_id_returns_400() {
    let app = TestApp::new();

    let response = app.delete("/dentists/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
