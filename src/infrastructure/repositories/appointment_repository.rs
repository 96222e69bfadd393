//! Appointment Repository Implementation
//!
//! PostgreSQL implementation of the AppointmentRepository trait.
//! Maps between the `appointment` table and the domain Appointment entity.
//!
//! Besides plain foreign-key creation, this repository resolves natural keys
//! (patient RG, dentist registration code) to foreign keys at insert time. A
//! failed resolution is surfaced as an internal error rather than a
//! not-found condition.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Appointment, AppointmentRepository};
use crate::shared::error::AppError;

/// Database row representation matching the `appointment` table schema.
#[derive(Debug, sqlx::FromRow)]
struct AppointmentRow {
    id: i64,
    date: String,
    description: String,
    patient_id: i64,
    dentist_id: i64,
}

impl AppointmentRow {
    /// Convert database row to domain Appointment entity.
    fn into_appointment(self) -> Appointment {
        Appointment {
            id: self.id,
            date: self.date,
            description: self.description,
            patient_id: self.patient_id,
            dentist_id: self.dentist_id,
        }
    }
}

/// PostgreSQL appointment repository implementation.
#[derive(Clone)]
pub struct PgAppointmentRepository {
    pool: PgPool,
}

impl PgAppointmentRepository {
    /// Create a new PgAppointmentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentRepository for PgAppointmentRepository {
    /// Find an appointment by primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>, AppError> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            r#"
            SELECT id, date, description, patient_id, dentist_id
            FROM appointment
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_appointment()))
    }

    /// List every appointment of the patient with the given RG.
    async fn find_by_patient_rg(&self, rg: &str) -> Result<Vec<Appointment>, AppError> {
        let rows = sqlx::query_as::<_, AppointmentRow>(
            r#"
            SELECT a.id, a.date, a.description, a.patient_id, a.dentist_id
            FROM appointment a
            JOIN patient p ON p.id = a.patient_id
            WHERE p.rg = $1
            ORDER BY a.id
            "#,
        )
        .bind(rg)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_appointment()).collect())
    }

    /// Insert a new appointment with resolved foreign keys.
    async fn create(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        let row = sqlx::query_as::<_, AppointmentRow>(
            r#"
            INSERT INTO appointment (date, description, patient_id, dentist_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, date, description, patient_id, dentist_id
            "#,
        )
        .bind(&appointment.date)
        .bind(&appointment.description)
        .bind(appointment.patient_id)
        .bind(appointment.dentist_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_appointment())
    }

    /// Insert a new appointment resolving the patient by RG and the dentist
    /// by registration code.
    async fn create_by_natural_keys(
        &self,
        date: &str,
        description: &str,
        patient_rg: &str,
        dentist_registration: &str,
    ) -> Result<Appointment, AppError> {
        let patient_id: Option<(i64,)> = sqlx::query_as("SELECT id FROM patient WHERE rg = $1")
            .bind(patient_rg)
            .fetch_optional(&self.pool)
            .await?;

        let patient_id = patient_id
            .map(|(id,)| id)
            .ok_or_else(|| {
                AppError::Internal(format!("could not resolve patient rg {patient_rg}"))
            })?;

        let dentist_id: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM dentist WHERE registration = $1")
                .bind(dentist_registration)
                .fetch_optional(&self.pool)
                .await?;

        let dentist_id = dentist_id.map(|(id,)| id).ok_or_else(|| {
            AppError::Internal(format!(
                "could not resolve dentist registration {dentist_registration}"
            ))
        })?;

        let appointment = Appointment {
            id: 0,
            date: date.to_string(),
            description: description.to_string(),
            patient_id,
            dentist_id,
        };

        self.create(&appointment).await
    }

    /// Overwrite an existing appointment row.
    async fn update(&self, appointment: &Appointment) -> Result<Appointment, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE appointment
            SET date = $1, description = $2, patient_id = $3, dentist_id = $4
            WHERE id = $5
            "#,
        )
        .bind(&appointment.date)
        .bind(&appointment.description)
        .bind(appointment.patient_id)
        .bind(appointment.dentist_id)
        .bind(appointment.id)
        .execute(&self.pool)
        .await?;

        tracing::debug!(rows_affected = result.rows_affected(), "appointment updated");

        Ok(appointment.clone())
    }

    /// Delete an appointment by id. Returns false when no row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM appointment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
