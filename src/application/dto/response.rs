//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{Appointment, Dentist, Patient};

/// Patient response
#[derive(Debug, Serialize)]
pub struct PatientResponse {
    pub id: i64,
    pub surname: String,
    pub name: String,
    pub rg: String,
    pub registration_date: String,
}

impl From<Patient> for PatientResponse {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            surname: patient.surname,
            name: patient.name,
            rg: patient.rg,
            registration_date: patient.registration_date,
        }
    }
}

/// Dentist response
#[derive(Debug, Serialize)]
pub struct DentistResponse {
    pub id: i64,
    pub surname: String,
    pub name: String,
    pub registration: String,
}

impl From<Dentist> for DentistResponse {
    fn from(dentist: Dentist) -> Self {
        Self {
            id: dentist.id,
            surname: dentist.surname,
            name: dentist.name,
            registration: dentist.registration,
        }
    }
}

/// Appointment response
#[derive(Debug, Serialize)]
pub struct AppointmentResponse {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub patient_id: i64,
    pub dentist_id: i64,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            date: appointment.date,
            description: appointment.description,
            patient_id: appointment.patient_id,
            dentist_id: appointment.dentist_id,
        }
    }
}
