//! Patient API Tests
//!
//! Exercises the request-validation surface of the patient routes: path
//! parameter parsing, JSON binding, and required-field checks. Flows that
//! reach the database live in the service unit tests against mocked
//! repositories.

use axum::http::StatusCode;

use crate::common::TestApp;

#[tokio::test]
async fn test_get_patient_with_malformed_id_returns_400() {
    let app = TestApp::new();

    let response = app.get("/patients/id/not-a-number").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_patient_with_malformed_json_returns_422() {
    let app = TestApp::new();

    let response = app.post_json("/patients", "{not json").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_patient_with_missing_fields_returns_422() {
    let app = TestApp::new();

    // rg and registration_date absent
    let response = app
        .post_json("/patients", r#"{"surname":"Silva","name":"Ana"}"#)
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_patient_with_empty_field_returns_422() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/patients",
            r#"{"surname":"Silva","name":"","rg":"44.555.666-7","registration_date":"2023-01-15"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_patient_with_malformed_id_returns_400() {
    let app = TestApp::new();

    let response = app
        .put_json(
            "/patients/abc",
            r#"{"surname":"Silva","name":"Ana","rg":"44.555.666-7","registration_date":"2023-01-15"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_patient_with_malformed_json_returns_422() {
    let app = TestApp::new();

    let response = app.patch_json("/patients/1", "[1,2,3]").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_patient_with_malformed_id_returns_400() {
    let app = TestApp::new();

    let response = app.delete("/patients/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_body_carries_code_and_message() {
    let app = TestApp::new();

    let response = app.get("/patients/id/not-a-number").await;
    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["code"], 400);
    assert_eq!(json["message"], "invalid id");
}
