//! Appointment API Tests
//!
//! Exercises the request-validation surface of the appointment routes,
//! including both creation paths and the stricter update body contract.

use axum::http::StatusCode;

use crate::common::TestApp;

#[tokio::test]
async fn test_get_appointment_with_malformed_id_returns_400() {
    let app = TestApp::new();

    let response = app.get("/appointments/id/not-a-number").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_by_ids_with_malformed_patient_id_returns_400() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/appointments/id/abc/3",
            r#"{"date":"2024-03-10","description":"cleaning"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_by_ids_with_malformed_dentist_id_returns_400() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/appointments/id/7/abc",
            r#"{"date":"2024-03-10","description":"cleaning"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_by_ids_with_empty_date_returns_422() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/appointments/id/7/3",
            r#"{"date":"","description":"cleaning"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_by_natural_keys_with_malformed_json_returns_422() {
    let app = TestApp::new();

    let response = app
        .post_json("/appointments/rg-registration/44.555.666-7/MP-123", "{")
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_with_missing_references_returns_422() {
    let app = TestApp::new();

    // patient_id and dentist_id absent; the full-replace contract requires them
    let response = app
        .put_json(
            "/appointments/5",
            r#"{"date":"2024-03-10","description":"cleaning"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_with_zero_patient_id_returns_422() {
    let app = TestApp::new();

    let response = app
        .put_json(
            "/appointments/5",
            r#"{"patient_id":0,"dentist_id":3,"date":"2024-03-10","description":"cleaning"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_with_malformed_id_returns_400() {
    let app = TestApp::new();

    let response = app.delete("/appointments/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
