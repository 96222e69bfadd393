//! Dentist Service
//!
//! Handles dentist management operations, including the one business rule of
//! the system: professional registration codes must be unique. The check
//! re-reads all persisted dentists immediately before every write.
//!
//! Known defects preserved from the observed behavior:
//! - The read-then-write check runs with no transaction or lock, so two
//!   concurrent creates with the same registration can both pass.
//! - On update/patch the scan also matches the row being updated, so keeping
//!   a dentist's own registration is rejected as a duplicate.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Dentist, DentistRepository};

/// Dentist service trait
#[async_trait]
pub trait DentistService: Send + Sync {
    /// Get dentist by ID
    async fn get_dentist(&self, id: i64) -> Result<Dentist, DentistError>;

    /// Get dentist by professional registration code
    async fn get_dentist_by_registration(
        &self,
        registration: &str,
    ) -> Result<Dentist, DentistError>;

    /// List all dentists
    async fn list_dentists(&self) -> Result<Vec<Dentist>, DentistError>;

    /// Create a new dentist after checking registration uniqueness
    async fn create_dentist(&self, data: WriteDentistDto) -> Result<Dentist, DentistError>;

    /// Fully replace an existing dentist after checking registration uniqueness
    async fn update_dentist(&self, id: i64, data: WriteDentistDto)
        -> Result<Dentist, DentistError>;

    /// Partially update a dentist; absent fields keep their persisted value.
    /// The uniqueness check only runs when a registration value was supplied.
    async fn patch_dentist(&self, id: i64, patch: DentistPatchDto)
        -> Result<Dentist, DentistError>;

    /// Delete a dentist by ID
    async fn delete_dentist(&self, id: i64) -> Result<(), DentistError>;
}

/// Full-write payload for create and update
#[derive(Debug, Clone)]
pub struct WriteDentistDto {
    pub surname: String,
    pub name: String,
    pub registration: String,
}

/// Partial-update payload; `None` means "leave unchanged"
#[derive(Debug, Clone, Default)]
pub struct DentistPatchDto {
    pub surname: Option<String>,
    pub name: Option<String>,
    pub registration: Option<String>,
}

/// Dentist service errors
#[derive(Debug, thiserror::Error)]
pub enum DentistError {
    #[error("dentist not found")]
    NotFound,

    #[error("registration already exists")]
    RegistrationTaken,

    #[error("internal error: {0}")]
    Internal(String),
}

/// DentistService implementation
pub struct DentistServiceImpl<R>
where
    R: DentistRepository,
{
    repo: Arc<R>,
}

impl<R> DentistServiceImpl<R>
where
    R: DentistRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Reject the write when any persisted dentist carries the registration.
    /// Deliberately also matches the row being updated.
    async fn check_registration_unique(&self, registration: &str) -> Result<(), DentistError> {
        let dentists = self
            .repo
            .find_all()
            .await
            .map_err(|e| DentistError::Internal(e.to_string()))?;

        if dentists.iter().any(|d| d.registration == registration) {
            return Err(DentistError::RegistrationTaken);
        }

        Ok(())
    }
}

#[async_trait]
impl<R> DentistService for DentistServiceImpl<R>
where
    R: DentistRepository + 'static,
{
    async fn get_dentist(&self, id: i64) -> Result<Dentist, DentistError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DentistError::Internal(e.to_string()))?
            .ok_or(DentistError::NotFound)
    }

    async fn get_dentist_by_registration(
        &self,
        registration: &str,
    ) -> Result<Dentist, DentistError> {
        self.repo
            .find_by_registration(registration)
            .await
            .map_err(|e| DentistError::Internal(e.to_string()))?
            .ok_or(DentistError::NotFound)
    }

    async fn list_dentists(&self) -> Result<Vec<Dentist>, DentistError> {
        self.repo
            .find_all()
            .await
            .map_err(|e| DentistError::Internal(e.to_string()))
    }

    async fn create_dentist(&self, data: WriteDentistDto) -> Result<Dentist, DentistError> {
        self.check_registration_unique(&data.registration).await?;

        let dentist = Dentist {
            id: 0,
            surname: data.surname,
            name: data.name,
            registration: data.registration,
        };

        self.repo
            .create(&dentist)
            .await
            .map_err(|e| DentistError::Internal(e.to_string()))
    }

    async fn update_dentist(
        &self,
        id: i64,
        data: WriteDentistDto,
    ) -> Result<Dentist, DentistError> {
        // Uniqueness scan runs before the existence check, matching the
        // observed behavior
        self.check_registration_unique(&data.registration).await?;

        let mut dentist = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DentistError::Internal(e.to_string()))?
            .ok_or(DentistError::NotFound)?;

        dentist.surname = data.surname;
        dentist.name = data.name;
        dentist.registration = data.registration;

        self.repo
            .update(&dentist)
            .await
            .map_err(|e| DentistError::Internal(e.to_string()))
    }

    async fn patch_dentist(
        &self,
        id: i64,
        patch: DentistPatchDto,
    ) -> Result<Dentist, DentistError> {
        if let Some(ref registration) = patch.registration {
            self.check_registration_unique(registration).await?;
        }

        let mut dentist = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DentistError::Internal(e.to_string()))?
            .ok_or(DentistError::NotFound)?;

        // Merge: only supplied fields overwrite the persisted row
        if let Some(surname) = patch.surname {
            dentist.surname = surname;
        }
        if let Some(name) = patch.name {
            dentist.name = name;
        }
        if let Some(registration) = patch.registration {
            dentist.registration = registration;
        }

        self.repo
            .update(&dentist)
            .await
            .map_err(|e| DentistError::Internal(e.to_string()))
    }

    async fn delete_dentist(&self, id: i64) -> Result<(), DentistError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DentistError::Internal(e.to_string()))?;

        if !deleted {
            return Err(DentistError::NotFound);
        }

        Ok(())
    }
}
