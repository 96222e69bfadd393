//! Patient Service
//!
//! Handles patient management operations. The patient entity carries no
//! business rules beyond required-field validation at the handler, so this
//! service maps repository results into typed errors and implements the
//! merge semantics of partial updates.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Patient, PatientRepository};

/// Patient service trait
#[async_trait]
pub trait PatientService: Send + Sync {
    /// Get patient by ID
    async fn get_patient(&self, id: i64) -> Result<Patient, PatientError>;

    /// Get patient by civil registry number
    async fn get_patient_by_rg(&self, rg: &str) -> Result<Patient, PatientError>;

    /// List all patients
    async fn list_patients(&self) -> Result<Vec<Patient>, PatientError>;

    /// Create a new patient
    async fn create_patient(&self, data: WritePatientDto) -> Result<Patient, PatientError>;

    /// Fully replace an existing patient
    async fn update_patient(&self, id: i64, data: WritePatientDto)
        -> Result<Patient, PatientError>;

    /// Partially update a patient; absent fields keep their persisted value
    async fn patch_patient(&self, id: i64, patch: PatientPatchDto)
        -> Result<Patient, PatientError>;

    /// Delete a patient by ID
    async fn delete_patient(&self, id: i64) -> Result<(), PatientError>;
}

/// Full-write payload for create and update
#[derive(Debug, Clone)]
pub struct WritePatientDto {
    pub surname: String,
    pub name: String,
    pub rg: String,
    pub registration_date: String,
}

/// Partial-update payload; `None` means "leave unchanged"
#[derive(Debug, Clone, Default)]
pub struct PatientPatchDto {
    pub surname: Option<String>,
    pub name: Option<String>,
    pub rg: Option<String>,
    pub registration_date: Option<String>,
}

/// Patient service errors
#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("patient not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

/// PatientService implementation
pub struct PatientServiceImpl<R>
where
    R: PatientRepository,
{
    repo: Arc<R>,
}

impl<R> PatientServiceImpl<R>
where
    R: PatientRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> PatientService for PatientServiceImpl<R>
where
    R: PatientRepository + 'static,
{
    async fn get_patient(&self, id: i64) -> Result<Patient, PatientError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| PatientError::Internal(e.to_string()))?
            .ok_or(PatientError::NotFound)
    }

    async fn get_patient_by_rg(&self, rg: &str) -> Result<Patient, PatientError> {
        self.repo
            .find_by_rg(rg)
            .await
            .map_err(|e| PatientError::Internal(e.to_string()))?
            .ok_or(PatientError::NotFound)
    }

    async fn list_patients(&self) -> Result<Vec<Patient>, PatientError> {
        self.repo
            .find_all()
            .await
            .map_err(|e| PatientError::Internal(e.to_string()))
    }

    async fn create_patient(&self, data: WritePatientDto) -> Result<Patient, PatientError> {
        let patient = Patient {
            id: 0,
            surname: data.surname,
            name: data.name,
            rg: data.rg,
            registration_date: data.registration_date,
        };

        self.repo
            .create(&patient)
            .await
            .map_err(|e| PatientError::Internal(e.to_string()))
    }

    async fn update_patient(
        &self,
        id: i64,
        data: WritePatientDto,
    ) -> Result<Patient, PatientError> {
        let mut patient = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| PatientError::Internal(e.to_string()))?
            .ok_or(PatientError::NotFound)?;

        patient.surname = data.surname;
        patient.name = data.name;
        patient.rg = data.rg;
        patient.registration_date = data.registration_date;

        self.repo
            .update(&patient)
            .await
            .map_err(|e| PatientError::Internal(e.to_string()))
    }

    async fn patch_patient(
        &self,
        id: i64,
        patch: PatientPatchDto,
    ) -> Result<Patient, PatientError> {
        let mut patient = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| PatientError::Internal(e.to_string()))?
            .ok_or(PatientError::NotFound)?;

        // Merge: only supplied fields overwrite the persisted row
        if let Some(surname) = patch.surname {
            patient.surname = surname;
        }
        if let Some(name) = patch.name {
            patient.name = name;
        }
        if let Some(rg) = patch.rg {
            patient.rg = rg;
        }
        if let Some(registration_date) = patch.registration_date {
            patient.registration_date = registration_date;
        }

        self.repo
            .update(&patient)
            .await
            .map_err(|e| PatientError::Internal(e.to_string()))
    }

    async fn delete_patient(&self, id: i64) -> Result<(), PatientError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| PatientError::Internal(e.to_string()))?;

        if !deleted {
            return Err(PatientError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MockPatientRepository;
    use pretty_assertions::assert_eq;

    fn persisted_patient() -> Patient {
        Patient {
            id: 7,
            surname: "Silva".into(),
            name: "Ana".into(),
            rg: "44.555.666-7".into(),
            registration_date: "2023-01-15".into(),
        }
    }

    #[tokio::test]
    async fn get_patient_maps_missing_row_to_not_found() {
        let mut repo = MockPatientRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = PatientServiceImpl::new(Arc::new(repo));
        let result = service.get_patient(99).await;

        assert!(matches!(result, Err(PatientError::NotFound)));
    }

    #[tokio::test]
    async fn patch_keeps_persisted_values_for_absent_fields() {
        let mut repo = MockPatientRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(persisted_patient())));
        repo.expect_update()
            .withf(|p: &Patient| {
                p.surname == "Souza"
                    && p.name == "Ana"
                    && p.rg == "44.555.666-7"
                    && p.registration_date == "2023-01-15"
            })
            .returning(|p| Ok(p.clone()));

        let service = PatientServiceImpl::new(Arc::new(repo));
        let patch = PatientPatchDto {
            surname: Some("Souza".into()),
            ..Default::default()
        };
        let updated = service.patch_patient(7, patch).await.unwrap();

        assert_eq!(updated.surname, "Souza");
        assert_eq!(updated.name, "Ana");
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let mut repo = MockPatientRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(persisted_patient())));
        repo.expect_update().returning(|p| Ok(p.clone()));

        let service = PatientServiceImpl::new(Arc::new(repo));
        let data = WritePatientDto {
            surname: "Souza".into(),
            name: "Beatriz".into(),
            rg: "11.222.333-4".into(),
            registration_date: "2024-06-01".into(),
        };
        let updated = service.update_patient(7, data).await.unwrap();

        assert_eq!(updated.id, 7);
        assert_eq!(updated.surname, "Souza");
        assert_eq!(updated.name, "Beatriz");
        assert_eq!(updated.rg, "11.222.333-4");
        assert_eq!(updated.registration_date, "2024-06-01");
    }

    #[tokio::test]
    async fn delete_missing_patient_is_not_found() {
        let mut repo = MockPatientRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = PatientServiceImpl::new(Arc::new(repo));
        let result = service.delete_patient(99).await;

        assert!(matches!(result, Err(PatientError::NotFound)));
    }

    #[tokio::test]
    async fn delete_existing_patient_succeeds() {
        let mut repo = MockPatientRepository::new();
        repo.expect_delete().returning(|_| Ok(true));

        let service = PatientServiceImpl::new(Arc::new(repo));
        assert!(service.delete_patient(7).await.is_ok());
    }
}
