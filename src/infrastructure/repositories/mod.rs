//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.
//!
//! Each repository translates entity operations into parameterized SQL
//! statements and maps "no rows" to `None` (or `false` on delete) so the
//! service layer can decide what a missing row means.
//!
//! ## Available Repositories
//!
//! - **PgPatientRepository** - Patient rows in the `patient` table
//! - **PgDentistRepository** - Dentist rows in the `dentist` table
//! - **PgAppointmentRepository** - Appointment rows with natural-key resolution

mod appointment_repository;
mod dentist_repository;
mod patient_repository;

pub use appointment_repository::PgAppointmentRepository;
pub use dentist_repository::PgDentistRepository;
pub use patient_repository::PgPatientRepository;
