//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/patients", patient_routes())
        .nest("/dentists", dentist_routes())
        .nest("/appointments", appointment_routes())
        // Ping and health check endpoints
        .route("/ping", get(handlers::health::ping))
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// Patient routes
fn patient_routes() -> Router<AppState> {
    Router::new()
        .route("/id/{id}", get(handlers::patient::get_patient_by_id))
        .route("/rg/{rg}", get(handlers::patient::get_patient_by_rg))
        .route("/", get(handlers::patient::list_patients))
        .route("/", post(handlers::patient::create_patient))
        .route("/{id}", put(handlers::patient::update_patient))
        .route("/{id}", patch(handlers::patient::patch_patient))
        .route("/{id}", delete(handlers::patient::delete_patient))
}

/// Dentist routes
fn dentist_routes() -> Router<AppState> {
    Router::new()
        .route("/id/{id}", get(handlers::dentist::get_dentist_by_id))
        .route(
            "/registration/{registration}",
            get(handlers::dentist::get_dentist_by_registration),
        )
        .route("/", get(handlers::dentist::list_dentists))
        .route("/", post(handlers::dentist::create_dentist))
        .route("/{id}", put(handlers::dentist::update_dentist))
        .route("/{id}", patch(handlers::dentist::patch_dentist))
        .route("/{id}", delete(handlers::dentist::delete_dentist))
}

/// Appointment routes
fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/id/{id}", get(handlers::appointment::get_appointment_by_id))
        .route("/rg/{rg}", get(handlers::appointment::list_appointments_by_rg))
        // Positional params: patient id, then dentist id. The first segment
        // shares its name with the by-id GET route so the match trees agree.
        .route(
            "/id/{id}/{dentist_id}",
            post(handlers::appointment::create_appointment_by_ids),
        )
        .route(
            "/rg-registration/{patient_rg}/{dentist_registration}",
            post(handlers::appointment::create_appointment_by_natural_keys),
        )
        .route("/{id}", put(handlers::appointment::update_appointment))
        .route("/{id}", patch(handlers::appointment::patch_appointment))
        .route("/{id}", delete(handlers::appointment::delete_appointment))
}
