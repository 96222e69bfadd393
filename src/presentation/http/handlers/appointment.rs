//! Appointment Handlers
//!
//! Appointments support two creation paths: numeric patient/dentist ids, or
//! the patient's RG plus the dentist's registration code. Natural-key
//! resolution failures surface as 500 (storage error), not 404.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{
    CreateAppointmentRequest, PatchAppointmentRequest, UpdateAppointmentRequest,
};
use crate::application::dto::response::AppointmentResponse;
use crate::application::services::{
    AppointmentError, AppointmentService, AppointmentServiceImpl,
};
use crate::infrastructure::repositories::PgAppointmentRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn appointment_service(state: &AppState) -> AppointmentServiceImpl<PgAppointmentRepository> {
    let repo = Arc::new(PgAppointmentRepository::new(state.db.clone()));
    AppointmentServiceImpl::new(repo)
}

fn parse_id(raw: &str, what: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("invalid {what}")))
}

fn map_error(e: AppointmentError) -> AppError {
    match e {
        AppointmentError::NotFound => AppError::NotFound("appointment not found".into()),
        AppointmentError::Internal(msg) => AppError::Internal(msg),
    }
}

/// Get appointment by ID
pub async fn get_appointment_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let id = parse_id(&id, "id")?;

    let appointment = appointment_service(&state)
        .get_appointment(id)
        .await
        .map_err(map_error)?;

    Ok(Json(AppointmentResponse::from(appointment)))
}

/// List appointments by patient civil registry number
pub async fn list_appointments_by_rg(
    State(state): State<AppState>,
    Path(rg): Path<String>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let appointments = appointment_service(&state)
        .list_by_patient_rg(&rg)
        .await
        .map_err(map_error)?;

    Ok(Json(
        appointments
            .into_iter()
            .map(AppointmentResponse::from)
            .collect(),
    ))
}

/// Create an appointment via numeric patient and dentist ids
pub async fn create_appointment_by_ids(
    State(state): State<AppState>,
    Path((patient_id, dentist_id)): Path<(String, String)>,
    body: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AppointmentResponse>), AppError> {
    let patient_id = parse_id(&patient_id, "patient id")?;
    let dentist_id = parse_id(&dentist_id, "dentist id")?;
    let Json(body) = body.map_err(|_| AppError::UnprocessableEntity("invalid json".into()))?;
    body.validate()
        .map_err(|_| AppError::Validation("date and description can't be empty".into()))?;

    let appointment = appointment_service(&state)
        .create_by_ids(body.into(), patient_id, dentist_id)
        .await
        .map_err(map_error)?;

    Ok((
        StatusCode::CREATED,
        Json(AppointmentResponse::from(appointment)),
    ))
}

/// Create an appointment via the patient's RG and the dentist's registration
/// code
pub async fn create_appointment_by_natural_keys(
    State(state): State<AppState>,
    Path((patient_rg, dentist_registration)): Path<(String, String)>,
    body: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AppointmentResponse>), AppError> {
    let Json(body) = body.map_err(|_| AppError::UnprocessableEntity("invalid json".into()))?;
    body.validate()
        .map_err(|_| AppError::Validation("date and description can't be empty".into()))?;

    let appointment = appointment_service(&state)
        .create_by_natural_keys(body.into(), &patient_rg, &dentist_registration)
        .await
        .map_err(map_error)?;

    Ok((
        StatusCode::CREATED,
        Json(AppointmentResponse::from(appointment)),
    ))
}

/// Fully replace an existing appointment
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateAppointmentRequest>, JsonRejection>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let id = parse_id(&id, "id")?;
    let Json(body) = body.map_err(|_| AppError::UnprocessableEntity("invalid json".into()))?;
    body.validate().map_err(|_| {
        AppError::Validation("patient_id, dentist_id, date and description are required".into())
    })?;

    let appointment = appointment_service(&state)
        .update_appointment(id, body.into())
        .await
        .map_err(map_error)?;

    Ok(Json(AppointmentResponse::from(appointment)))
}

/// Partially update an appointment; incoming values overwrite the row as-is
/// (no merge with persisted values, unlike patient/dentist patch)
pub async fn patch_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PatchAppointmentRequest>, JsonRejection>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let id = parse_id(&id, "id")?;
    let Json(body) = body.map_err(|_| AppError::UnprocessableEntity("invalid json".into()))?;

    let appointment = appointment_service(&state)
        .patch_appointment(id, body.into())
        .await
        .map_err(map_error)?;

    Ok(Json(AppointmentResponse::from(appointment)))
}

/// Delete an appointment
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id, "id")?;

    appointment_service(&state)
        .delete_appointment(id)
        .await
        .map_err(map_error)?;

    Ok(StatusCode::NO_CONTENT)
}
