//! Patient entity and repository trait.
//!
//! Maps to the `patient` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a patient of the clinic.
///
/// Maps to the `patient` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - surname: TEXT NOT NULL
/// - name: TEXT NOT NULL
/// - rg: TEXT NOT NULL (civil registry number, unique in practice but not
///   enforced by the schema)
/// - registration_date: TEXT NOT NULL (free-form, no parsed date type)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Database-assigned primary key
    pub id: i64,

    /// Patient surname
    pub surname: String,

    /// Patient given name
    pub name: String,

    /// Civil registry number
    pub rg: String,

    /// Date the patient was registered at the clinic (free-form string)
    pub registration_date: String,
}

/// Repository trait for Patient data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Find a patient by primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, AppError>;

    /// Find a patient by civil registry number.
    async fn find_by_rg(&self, rg: &str) -> Result<Option<Patient>, AppError>;

    /// Load every persisted patient.
    async fn find_all(&self) -> Result<Vec<Patient>, AppError>;

    /// Insert a new patient, returning the row with its assigned id.
    async fn create(&self, patient: &Patient) -> Result<Patient, AppError>;

    /// Overwrite an existing patient row identified by `patient.id`.
    async fn update(&self, patient: &Patient) -> Result<Patient, AppError>;

    /// Delete a patient by id. Returns false when no row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
