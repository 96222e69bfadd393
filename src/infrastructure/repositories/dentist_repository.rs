//! Dentist Repository Implementation
//!
//! PostgreSQL implementation of the DentistRepository trait.
//! Maps between the `dentist` table and the domain Dentist entity.
//!
//! The `dentist.registration` column carries no unique constraint; the
//! uniqueness rule lives in the service layer.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Dentist, DentistRepository};
use crate::shared::error::AppError;

/// Database row representation matching the `dentist` table schema.
#[derive(Debug, sqlx::FromRow)]
struct DentistRow {
    id: i64,
    surname: String,
    name: String,
    registration: String,
}

impl DentistRow {
    /// Convert database row to domain Dentist entity.
    fn into_dentist(self) -> Dentist {
        Dentist {
            id: self.id,
            surname: self.surname,
            name: self.name,
            registration: self.registration,
        }
    }
}

/// PostgreSQL dentist repository implementation.
#[derive(Clone)]
pub struct PgDentistRepository {
    pool: PgPool,
}

impl PgDentistRepository {
    /// Create a new PgDentistRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DentistRepository for PgDentistRepository {
    /// Find a dentist by primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<Dentist>, AppError> {
        let row = sqlx::query_as::<_, DentistRow>(
            r#"
            SELECT id, surname, name, registration
            FROM dentist
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_dentist()))
    }

    /// Find a dentist by professional registration code.
    async fn find_by_registration(
        &self,
        registration: &str,
    ) -> Result<Option<Dentist>, AppError> {
        let row = sqlx::query_as::<_, DentistRow>(
            r#"
            SELECT id, surname, name, registration
            FROM dentist
            WHERE registration = $1
            "#,
        )
        .bind(registration)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_dentist()))
    }

    /// Load every persisted dentist.
    async fn find_all(&self) -> Result<Vec<Dentist>, AppError> {
        let rows = sqlx::query_as::<_, DentistRow>(
            r#"
            SELECT id, surname, name, registration
            FROM dentist
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_dentist()).collect())
    }

    /// Insert a new dentist, returning the row with its assigned id.
    async fn create(&self, dentist: &Dentist) -> Result<Dentist, AppError> {
        let row = sqlx::query_as::<_, DentistRow>(
            r#"
            INSERT INTO dentist (surname, name, registration)
            VALUES ($1, $2, $3)
            RETURNING id, surname, name, registration
            "#,
        )
        .bind(&dentist.surname)
        .bind(&dentist.name)
        .bind(&dentist.registration)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_dentist())
    }

    /// Overwrite an existing dentist row.
    async fn update(&self, dentist: &Dentist) -> Result<Dentist, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE dentist
            SET surname = $1, name = $2, registration = $3
            WHERE id = $4
            "#,
        )
        .bind(&dentist.surname)
        .bind(&dentist.name)
        .bind(&dentist.registration)
        .bind(dentist.id)
        .execute(&self.pool)
        .await?;

        tracing::debug!(rows_affected = result.rows_affected(), "dentist updated");

        Ok(dentist.clone())
    }

    /// Delete a dentist by id. Returns false when no row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM dentist WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
