//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **PatientService**: Patient CRUD with merge-style partial updates
//! - **DentistService**: Dentist CRUD plus the registration uniqueness rule
//! - **AppointmentService**: Appointment CRUD with two creation paths

pub mod appointment_service;
pub mod dentist_service;
pub mod patient_service;

// Re-export patient service types
pub use patient_service::{
    PatientError, PatientPatchDto, PatientService, PatientServiceImpl, WritePatientDto,
};

// Re-export dentist service types
pub use dentist_service::{
    DentistError, DentistPatchDto, DentistService, DentistServiceImpl, WriteDentistDto,
};

// Re-export appointment service types
pub use appointment_service::{
    AppointmentError, AppointmentService, AppointmentServiceImpl, CreateAppointmentDto,
    WriteAppointmentDto,
};
