//! Dentist Handlers
//!
//! The duplicate-registration rejection from the service layer maps to 422
//! with the rule's message; other write failures stay 500.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{PatchDentistRequest, WriteDentistRequest};
use crate::application::dto::response::DentistResponse;
use crate::application::services::{DentistError, DentistService, DentistServiceImpl};
use crate::infrastructure::repositories::PgDentistRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn dentist_service(state: &AppState) -> DentistServiceImpl<PgDentistRepository> {
    let repo = Arc::new(PgDentistRepository::new(state.db.clone()));
    DentistServiceImpl::new(repo)
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::BadRequest("invalid id".into()))
}

fn map_error(e: DentistError) -> AppError {
    match e {
        DentistError::NotFound => AppError::NotFound("dentist not found".into()),
        DentistError::RegistrationTaken => {
            AppError::UnprocessableEntity("registration already exists".into())
        }
        DentistError::Internal(msg) => AppError::Internal(msg),
    }
}

/// Get dentist by ID
pub async fn get_dentist_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DentistResponse>, AppError> {
    let id = parse_id(&id)?;

    let dentist = dentist_service(&state)
        .get_dentist(id)
        .await
        .map_err(map_error)?;

    Ok(Json(DentistResponse::from(dentist)))
}

/// Get dentist by professional registration code
pub async fn get_dentist_by_registration(
    State(state): State<AppState>,
    Path(registration): Path<String>,
) -> Result<Json<DentistResponse>, AppError> {
    let dentist = dentist_service(&state)
        .get_dentist_by_registration(&registration)
        .await
        .map_err(map_error)?;

    Ok(Json(DentistResponse::from(dentist)))
}

/// List all dentists
pub async fn list_dentists(
    State(state): State<AppState>,
) -> Result<Json<Vec<DentistResponse>>, AppError> {
    let dentists = dentist_service(&state)
        .list_dentists()
        .await
        .map_err(map_error)?;

    Ok(Json(dentists.into_iter().map(DentistResponse::from).collect()))
}

/// Create a new dentist
pub async fn create_dentist(
    State(state): State<AppState>,
    body: Result<Json<WriteDentistRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DentistResponse>), AppError> {
    let Json(body) = body.map_err(|_| AppError::UnprocessableEntity("invalid json".into()))?;
    body.validate()
        .map_err(|_| AppError::Validation("fields can't be empty".into()))?;

    let dentist = dentist_service(&state)
        .create_dentist(body.into())
        .await
        .map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(DentistResponse::from(dentist))))
}

/// Fully replace an existing dentist
pub async fn update_dentist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<WriteDentistRequest>, JsonRejection>,
) -> Result<Json<DentistResponse>, AppError> {
    let id = parse_id(&id)?;
    let Json(body) = body.map_err(|_| AppError::UnprocessableEntity("invalid json".into()))?;
    body.validate()
        .map_err(|_| AppError::Validation("fields can't be empty".into()))?;

    let dentist = dentist_service(&state)
        .update_dentist(id, body.into())
        .await
        .map_err(map_error)?;

    Ok(Json(DentistResponse::from(dentist)))
}

/// Partially update a dentist; empty or absent fields keep their persisted
/// value
pub async fn patch_dentist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PatchDentistRequest>, JsonRejection>,
) -> Result<Json<DentistResponse>, AppError> {
    let id = parse_id(&id)?;
    let Json(body) = body.map_err(|_| AppError::UnprocessableEntity("invalid json".into()))?;

    let dentist = dentist_service(&state)
        .patch_dentist(id, body.into())
        .await
        .map_err(map_error)?;

    Ok(Json(DentistResponse::from(dentist)))
}

/// Delete a dentist
pub async fn delete_dentist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;

    dentist_service(&state)
        .delete_dentist(id)
        .await
        .map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}
