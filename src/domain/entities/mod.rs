//! # Domain Entities
//!
//! Core domain entities representing the main business objects of the clinic.
//! All entities map directly to their corresponding database tables.
//!
//! ## Entities
//!
//! - **Patient**: A clinic patient identified by id or civil registry number (RG)
//! - **Dentist**: A practitioner identified by id or professional registration code
//! - **Appointment**: A scheduled visit referencing one patient and one dentist
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer,
//! following the dependency inversion principle.

mod appointment;
mod dentist;
mod patient;

pub use patient::{Patient, PatientRepository};

pub use dentist::{Dentist, DentistRepository};

pub use appointment::{Appointment, AppointmentRepository};

// Repository mocks for service unit tests
#[cfg(test)]
pub use appointment::MockAppointmentRepository;
#[cfg(test)]
pub use dentist::MockDentistRepository;
#[cfg(test)]
pub use patient::MockPatientRepository;
