//! Appointment entity and repository trait.
//!
//! Maps to the `appointment` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a scheduled visit of a patient to a dentist.
///
/// Maps to the `appointment` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - date: TEXT NOT NULL (free-form, no parsed date type)
/// - description: TEXT NOT NULL
/// - patient_id: BIGINT NOT NULL REFERENCES patient(id)
/// - dentist_id: BIGINT NOT NULL REFERENCES dentist(id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Database-assigned primary key
    pub id: i64,

    /// Appointment date (free-form string)
    pub date: String,

    /// What the appointment is for
    pub description: String,

    /// Foreign key to the patient
    pub patient_id: i64,

    /// Foreign key to the dentist
    pub dentist_id: i64,
}

/// Repository trait for Appointment data access operations.
///
/// Appointments can be created through two paths: by numeric foreign keys, or
/// by the patient's RG plus the dentist's registration code. In the latter
/// case the storage layer resolves the natural keys to foreign keys; a failed
/// resolution is a storage error, not a not-found condition.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Find an appointment by primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>, AppError>;

    /// List every appointment of the patient with the given RG.
    async fn find_by_patient_rg(&self, rg: &str) -> Result<Vec<Appointment>, AppError>;

    /// Insert a new appointment with resolved foreign keys, returning the row
    /// with its assigned id.
    async fn create(&self, appointment: &Appointment) -> Result<Appointment, AppError>;

    /// Insert a new appointment resolving the patient by RG and the dentist by
    /// registration code. Resolution failure surfaces as an internal error.
    async fn create_by_natural_keys(
        &self,
        date: &str,
        description: &str,
        patient_rg: &str,
        dentist_registration: &str,
    ) -> Result<Appointment, AppError>;

    /// Overwrite an existing appointment row identified by `appointment.id`.
    async fn update(&self, appointment: &Appointment) -> Result<Appointment, AppError>;

    /// Delete an appointment by id. Returns false when no row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
