//! Patient Handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{PatchPatientRequest, WritePatientRequest};
use crate::application::dto::response::PatientResponse;
use crate::application::services::{PatientError, PatientService, PatientServiceImpl};
use crate::infrastructure::repositories::PgPatientRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn patient_service(state: &AppState) -> PatientServiceImpl<PgPatientRepository> {
    let repo = Arc::new(PgPatientRepository::new(state.db.clone()));
    PatientServiceImpl::new(repo)
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::BadRequest("invalid id".into()))
}

fn map_error(e: PatientError) -> AppError {
    match e {
        PatientError::NotFound => AppError::NotFound("patient not found".into()),
        PatientError::Internal(msg) => AppError::Internal(msg),
    }
}

/// Get patient by ID
pub async fn get_patient_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PatientResponse>, AppError> {
    let id = parse_id(&id)?;

    let patient = patient_service(&state)
        .get_patient(id)
        .await
        .map_err(map_error)?;

    Ok(Json(PatientResponse::from(patient)))
}

/// Get patient by civil registry number
pub async fn get_patient_by_rg(
    State(state): State<AppState>,
    Path(rg): Path<String>,
) -> Result<Json<PatientResponse>, AppError> {
    let patient = patient_service(&state)
        .get_patient_by_rg(&rg)
        .await
        .map_err(map_error)?;

    Ok(Json(PatientResponse::from(patient)))
}

/// List all patients
pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<PatientResponse>>, AppError> {
    let patients = patient_service(&state)
        .list_patients()
        .await
        .map_err(map_error)?;

    Ok(Json(patients.into_iter().map(PatientResponse::from).collect()))
}

/// Create a new patient
pub async fn create_patient(
    State(state): State<AppState>,
    body: Result<Json<WritePatientRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PatientResponse>), AppError> {
    let Json(body) = body.map_err(|_| AppError::UnprocessableEntity("invalid json".into()))?;
    body.validate()
        .map_err(|_| AppError::Validation("fields can't be empty".into()))?;

    let patient = patient_service(&state)
        .create_patient(body.into())
        .await
        .map_err(map_error)?;

    Ok((StatusCode::CREATED, Json(PatientResponse::from(patient))))
}

/// Fully replace an existing patient
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<WritePatientRequest>, JsonRejection>,
) -> Result<Json<PatientResponse>, AppError> {
    let id = parse_id(&id)?;
    let Json(body) = body.map_err(|_| AppError::UnprocessableEntity("invalid json".into()))?;
    body.validate()
        .map_err(|_| AppError::Validation("fields can't be empty".into()))?;

    let patient = patient_service(&state)
        .update_patient(id, body.into())
        .await
        .map_err(map_error)?;

    Ok(Json(PatientResponse::from(patient)))
}

/// Partially update a patient; empty or absent fields keep their persisted
/// value
pub async fn patch_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PatchPatientRequest>, JsonRejection>,
) -> Result<Json<PatientResponse>, AppError> {
    let id = parse_id(&id)?;
    let Json(body) = body.map_err(|_| AppError::UnprocessableEntity("invalid json".into()))?;

    let patient = patient_service(&state)
        .patch_patient(id, body.into())
        .await
        .map_err(map_error)?;

    Ok(Json(PatientResponse::from(patient)))
}

/// Delete a patient
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;

    patient_service(&state)
        .delete_patient(id)
        .await
        .map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}
