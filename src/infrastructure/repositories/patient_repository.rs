//! Patient Repository Implementation
//!
//! PostgreSQL implementation of the PatientRepository trait.
//! Maps between the `patient` table and the domain Patient entity.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Patient, PatientRepository};
use crate::shared::error::AppError;

/// Database row representation matching the `patient` table schema.
#[derive(Debug, sqlx::FromRow)]
struct PatientRow {
    id: i64,
    surname: String,
    name: String,
    rg: String,
    registration_date: String,
}

impl PatientRow {
    /// Convert database row to domain Patient entity.
    fn into_patient(self) -> Patient {
        Patient {
            id: self.id,
            surname: self.surname,
            name: self.name,
            rg: self.rg,
            registration_date: self.registration_date,
        }
    }
}

/// PostgreSQL patient repository implementation.
#[derive(Clone)]
pub struct PgPatientRepository {
    pool: PgPool,
}

impl PgPatientRepository {
    /// Create a new PgPatientRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PatientRepository for PgPatientRepository {
    /// Find a patient by primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, AppError> {
        let row = sqlx::query_as::<_, PatientRow>(
            r#"
            SELECT id, surname, name, rg, registration_date
            FROM patient
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_patient()))
    }

    /// Find a patient by civil registry number.
    async fn find_by_rg(&self, rg: &str) -> Result<Option<Patient>, AppError> {
        let row = sqlx::query_as::<_, PatientRow>(
            r#"
            SELECT id, surname, name, rg, registration_date
            FROM patient
            WHERE rg = $1
            "#,
        )
        .bind(rg)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_patient()))
    }

    /// Load every persisted patient.
    async fn find_all(&self) -> Result<Vec<Patient>, AppError> {
        let rows = sqlx::query_as::<_, PatientRow>(
            r#"
            SELECT id, surname, name, rg, registration_date
            FROM patient
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_patient()).collect())
    }

    /// Insert a new patient, returning the row with its assigned id.
    async fn create(&self, patient: &Patient) -> Result<Patient, AppError> {
        let row = sqlx::query_as::<_, PatientRow>(
            r#"
            INSERT INTO patient (surname, name, rg, registration_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, surname, name, rg, registration_date
            "#,
        )
        .bind(&patient.surname)
        .bind(&patient.name)
        .bind(&patient.rg)
        .bind(&patient.registration_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_patient())
    }

    /// Overwrite an existing patient row.
    async fn update(&self, patient: &Patient) -> Result<Patient, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE patient
            SET surname = $1, name = $2, rg = $3, registration_date = $4
            WHERE id = $5
            "#,
        )
        .bind(&patient.surname)
        .bind(&patient.name)
        .bind(&patient.rg)
        .bind(&patient.registration_date)
        .bind(patient.id)
        .execute(&self.pool)
        .await?;

        tracing::debug!(rows_affected = result.rows_affected(), "patient updated");

        Ok(patient.clone())
    }

    /// Delete a patient by id. Returns false when no row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM patient WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
