//! Appointment Service
//!
//! Handles appointment management operations. Appointments carry no business
//! rules of their own: slot uniqueness is not enforced, and referential
//! integrity is left to the database foreign keys.
//!
//! Unlike patient and dentist, partial update does NOT merge with the
//! persisted row; after an existence check the incoming values (zero defaults
//! included) overwrite the row as-is. The discrepancy is observed behavior
//! and preserved deliberately.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Appointment, AppointmentRepository};

/// Appointment service trait
#[async_trait]
pub trait AppointmentService: Send + Sync {
    /// Get appointment by ID
    async fn get_appointment(&self, id: i64) -> Result<Appointment, AppointmentError>;

    /// List all appointments of the patient with the given RG
    async fn list_by_patient_rg(&self, rg: &str) -> Result<Vec<Appointment>, AppointmentError>;

    /// Create an appointment referencing patient and dentist by numeric id
    async fn create_by_ids(
        &self,
        data: CreateAppointmentDto,
        patient_id: i64,
        dentist_id: i64,
    ) -> Result<Appointment, AppointmentError>;

    /// Create an appointment resolving the patient by RG and the dentist by
    /// registration code
    async fn create_by_natural_keys(
        &self,
        data: CreateAppointmentDto,
        patient_rg: &str,
        dentist_registration: &str,
    ) -> Result<Appointment, AppointmentError>;

    /// Fully replace an existing appointment
    async fn update_appointment(
        &self,
        id: i64,
        data: WriteAppointmentDto,
    ) -> Result<Appointment, AppointmentError>;

    /// Overwrite an existing appointment with the incoming values as-is
    async fn patch_appointment(
        &self,
        id: i64,
        data: WriteAppointmentDto,
    ) -> Result<Appointment, AppointmentError>;

    /// Delete an appointment by ID
    async fn delete_appointment(&self, id: i64) -> Result<(), AppointmentError>;
}

/// Creation payload; the references arrive as path parameters
#[derive(Debug, Clone)]
pub struct CreateAppointmentDto {
    pub date: String,
    pub description: String,
}

/// Full-write payload for update and patch
#[derive(Debug, Clone)]
pub struct WriteAppointmentDto {
    pub patient_id: i64,
    pub dentist_id: i64,
    pub date: String,
    pub description: String,
}

/// Appointment service errors
#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("appointment not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

/// AppointmentService implementation
pub struct AppointmentServiceImpl<R>
where
    R: AppointmentRepository,
{
    repo: Arc<R>,
}

impl<R> AppointmentServiceImpl<R>
where
    R: AppointmentRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> AppointmentService for AppointmentServiceImpl<R>
where
    R: AppointmentRepository + 'static,
{
    async fn get_appointment(&self, id: i64) -> Result<Appointment, AppointmentError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| AppointmentError::Internal(e.to_string()))?
            .ok_or(AppointmentError::NotFound)
    }

    async fn list_by_patient_rg(&self, rg: &str) -> Result<Vec<Appointment>, AppointmentError> {
        self.repo
            .find_by_patient_rg(rg)
            .await
            .map_err(|e| AppointmentError::Internal(e.to_string()))
    }

    async fn create_by_ids(
        &self,
        data: CreateAppointmentDto,
        patient_id: i64,
        dentist_id: i64,
    ) -> Result<Appointment, AppointmentError> {
        let appointment = Appointment {
            id: 0,
            date: data.date,
            description: data.description,
            patient_id,
            dentist_id,
        };

        self.repo
            .create(&appointment)
            .await
            .map_err(|e| AppointmentError::Internal(e.to_string()))
    }

    async fn create_by_natural_keys(
        &self,
        data: CreateAppointmentDto,
        patient_rg: &str,
        dentist_registration: &str,
    ) -> Result<Appointment, AppointmentError> {
        self.repo
            .create_by_natural_keys(&data.date, &data.description, patient_rg, dentist_registration)
            .await
            .map_err(|e| AppointmentError::Internal(e.to_string()))
    }

    async fn update_appointment(
        &self,
        id: i64,
        data: WriteAppointmentDto,
    ) -> Result<Appointment, AppointmentError> {
        let mut appointment = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| AppointmentError::Internal(e.to_string()))?
            .ok_or(AppointmentError::NotFound)?;

        appointment.patient_id = data.patient_id;
        appointment.dentist_id = data.dentist_id;
        appointment.date = data.date;
        appointment.description = data.description;

        self.repo
            .update(&appointment)
            .await
            .map_err(|e| AppointmentError::Internal(e.to_string()))
    }

    async fn patch_appointment(
        &self,
        id: i64,
        data: WriteAppointmentDto,
    ) -> Result<Appointment, AppointmentError> {
        // Existence check only; no merge with the persisted row
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| AppointmentError::Internal(e.to_string()))?
            .ok_or(AppointmentError::NotFound)?;

        let appointment = Appointment {
            id,
            date: data.date,
            description: data.description,
            patient_id: data.patient_id,
            dentist_id: data.dentist_id,
        };

        self.repo
            .update(&appointment)
            .await
            .map_err(|e| AppointmentError::Internal(e.to_string()))
    }

    async fn delete_appointment(&self, id: i64) -> Result<(), AppointmentError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| AppointmentError::Internal(e.to_string()))?;

        if !deleted {
            return Err(AppointmentError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MockAppointmentRepository;
    use pretty_assertions::assert_eq;

    fn persisted_appointment() -> Appointment {
        Appointment {
            id: 5,
            date: "2024-03-10".into(),
            description: "cleaning".into(),
            patient_id: 7,
            dentist_id: 3,
        }
    }

    #[tokio::test]
    async fn get_appointment_maps_missing_row_to_not_found() {
        let mut repo = MockAppointmentRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = AppointmentServiceImpl::new(Arc::new(repo));
        let result = service.get_appointment(99).await;

        assert!(matches!(result, Err(AppointmentError::NotFound)));
    }

    #[tokio::test]
    async fn create_by_ids_carries_path_references() {
        let mut repo = MockAppointmentRepository::new();
        repo.expect_create()
            .withf(|a: &Appointment| a.patient_id == 7 && a.dentist_id == 3)
            .returning(|a| {
                let mut created = a.clone();
                created.id = 5;
                Ok(created)
            });

        let service = AppointmentServiceImpl::new(Arc::new(repo));
        let data = CreateAppointmentDto {
            date: "2024-03-10".into(),
            description: "cleaning".into(),
        };
        let created = service.create_by_ids(data, 7, 3).await.unwrap();

        assert_eq!(created, persisted_appointment());
    }

    #[tokio::test]
    async fn natural_key_resolution_failure_surfaces_as_internal() {
        use crate::shared::error::AppError;

        let mut repo = MockAppointmentRepository::new();
        repo.expect_create_by_natural_keys()
            .returning(|_, _, _, _| Err(AppError::Internal("could not resolve patient rg".into())));

        let service = AppointmentServiceImpl::new(Arc::new(repo));
        let data = CreateAppointmentDto {
            date: "2024-03-10".into(),
            description: "cleaning".into(),
        };
        let result = service
            .create_by_natural_keys(data, "00.000.000-0", "MP-000")
            .await;

        assert!(matches!(result, Err(AppointmentError::Internal(_))));
    }

    #[tokio::test]
    async fn patch_overwrites_without_merging() {
        let mut repo = MockAppointmentRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(persisted_appointment())));
        // Incoming zero defaults land in the row as-is
        repo.expect_update()
            .withf(|a: &Appointment| {
                a.id == 5 && a.patient_id == 0 && a.dentist_id == 0 && a.date.is_empty()
            })
            .returning(|a| Ok(a.clone()));

        let service = AppointmentServiceImpl::new(Arc::new(repo));
        let data = WriteAppointmentDto {
            patient_id: 0,
            dentist_id: 0,
            date: String::new(),
            description: "rescheduled".into(),
        };
        let updated = service.patch_appointment(5, data).await.unwrap();

        assert_eq!(updated.description, "rescheduled");
        assert_eq!(updated.patient_id, 0);
    }

    #[tokio::test]
    async fn delete_missing_appointment_is_not_found() {
        let mut repo = MockAppointmentRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = AppointmentServiceImpl::new(Arc::new(repo));
        let result = service.delete_appointment(99).await;

        assert!(matches!(result, Err(AppointmentError::NotFound)));
    }
}
