//! Dentist entity and repository trait.
//!
//! Maps to the `dentist` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a dentist practicing at the clinic.
///
/// Maps to the `dentist` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - surname: TEXT NOT NULL
/// - name: TEXT NOT NULL
/// - registration: TEXT NOT NULL (professional registration code)
///
/// Registration uniqueness is enforced by the service layer with a full-table
/// scan before every write, not by a database constraint. Two concurrent
/// creates with the same registration can both pass the check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dentist {
    /// Database-assigned primary key
    pub id: i64,

    /// Dentist surname
    pub surname: String,

    /// Dentist given name
    pub name: String,

    /// Professional registration code
    pub registration: String,
}

/// Repository trait for Dentist data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DentistRepository: Send + Sync {
    /// Find a dentist by primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<Dentist>, AppError>;

    /// Find a dentist by professional registration code.
    async fn find_by_registration(&self, registration: &str)
        -> Result<Option<Dentist>, AppError>;

    /// Load every persisted dentist.
    async fn find_all(&self) -> Result<Vec<Dentist>, AppError>;

    /// Insert a new dentist, returning the row with its assigned id.
    async fn create(&self, dentist: &Dentist) -> Result<Dentist, AppError>;

    /// Overwrite an existing dentist row identified by `dentist.id`.
    async fn update(&self, dentist: &Dentist) -> Result<Dentist, AppError>;

    /// Delete a dentist by id. Returns false when no row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
