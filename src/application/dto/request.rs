//! Request DTOs
//!
//! Data structures for API request bodies.
//!
//! Full-write requests (create/update) validate that every field is present
//! and non-empty. Partial-update requests accept absent fields, and an empty
//! string is treated the same as an absent field: "leave unchanged".

use serde::Deserialize;
use validator::Validate;

use crate::application::services::{
    CreateAppointmentDto, DentistPatchDto, PatientPatchDto, WriteAppointmentDto, WriteDentistDto,
    WritePatientDto,
};

/// Empty strings mean "leave unchanged" in patch bodies
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Create or fully replace a patient
#[derive(Debug, Deserialize, Validate)]
pub struct WritePatientRequest {
    #[validate(length(min = 1, message = "fields can't be empty"))]
    pub surname: String,

    #[validate(length(min = 1, message = "fields can't be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "fields can't be empty"))]
    pub rg: String,

    #[validate(length(min = 1, message = "fields can't be empty"))]
    pub registration_date: String,
}

impl From<WritePatientRequest> for WritePatientDto {
    fn from(req: WritePatientRequest) -> Self {
        Self {
            surname: req.surname,
            name: req.name,
            rg: req.rg,
            registration_date: req.registration_date,
        }
    }
}

/// Partially update a patient
#[derive(Debug, Default, Deserialize)]
pub struct PatchPatientRequest {
    pub surname: Option<String>,
    pub name: Option<String>,
    pub rg: Option<String>,
    pub registration_date: Option<String>,
}

impl From<PatchPatientRequest> for PatientPatchDto {
    fn from(req: PatchPatientRequest) -> Self {
        Self {
            surname: non_empty(req.surname),
            name: non_empty(req.name),
            rg: non_empty(req.rg),
            registration_date: non_empty(req.registration_date),
        }
    }
}

/// Create or fully replace a dentist
#[derive(Debug, Deserialize, Validate)]
pub struct WriteDentistRequest {
    #[validate(length(min = 1, message = "fields can't be empty"))]
    pub surname: String,

    #[validate(length(min = 1, message = "fields can't be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "fields can't be empty"))]
    pub registration: String,
}

impl From<WriteDentistRequest> for WriteDentistDto {
    fn from(req: WriteDentistRequest) -> Self {
        Self {
            surname: req.surname,
            name: req.name,
            registration: req.registration,
        }
    }
}

/// Partially update a dentist
#[derive(Debug, Default, Deserialize)]
pub struct PatchDentistRequest {
    pub surname: Option<String>,
    pub name: Option<String>,
    pub registration: Option<String>,
}

impl From<PatchDentistRequest> for DentistPatchDto {
    fn from(req: PatchDentistRequest) -> Self {
        Self {
            surname: non_empty(req.surname),
            name: non_empty(req.name),
            registration: non_empty(req.registration),
        }
    }
}

/// Create an appointment; patient and dentist references arrive as path
/// parameters
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAppointmentRequest {
    #[validate(length(min = 1, message = "date and description can't be empty"))]
    pub date: String,

    #[validate(length(min = 1, message = "date and description can't be empty"))]
    pub description: String,
}

impl From<CreateAppointmentRequest> for CreateAppointmentDto {
    fn from(req: CreateAppointmentRequest) -> Self {
        Self {
            date: req.date,
            description: req.description,
        }
    }
}

/// Fully replace an appointment; all references and fields required
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAppointmentRequest {
    #[validate(range(min = 1, message = "patient_id and dentist_id are required"))]
    pub patient_id: i64,

    #[validate(range(min = 1, message = "patient_id and dentist_id are required"))]
    pub dentist_id: i64,

    #[validate(length(min = 1, message = "date and description can't be empty"))]
    pub date: String,

    #[validate(length(min = 1, message = "date and description can't be empty"))]
    pub description: String,
}

impl From<UpdateAppointmentRequest> for WriteAppointmentDto {
    fn from(req: UpdateAppointmentRequest) -> Self {
        Self {
            patient_id: req.patient_id,
            dentist_id: req.dentist_id,
            date: req.date,
            description: req.description,
        }
    }
}

/// Partially update an appointment.
///
/// Absent fields default to zero values and are passed through as-is; unlike
/// patient/dentist patch there is no merge with the persisted row.
#[derive(Debug, Default, Deserialize)]
pub struct PatchAppointmentRequest {
    #[serde(default)]
    pub patient_id: i64,

    #[serde(default)]
    pub dentist_id: i64,

    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub description: String,
}

impl From<PatchAppointmentRequest> for WriteAppointmentDto {
    fn from(req: PatchAppointmentRequest) -> Self {
        Self {
            patient_id: req.patient_id,
            dentist_id: req.dentist_id,
            date: req.date,
            description: req.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn write_patient_request_rejects_empty_fields() {
        let req = WritePatientRequest {
            surname: "Silva".into(),
            name: String::new(),
            rg: "44.555.666-7".into(),
            registration_date: "2023-01-15".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn write_patient_request_accepts_full_payload() {
        let req = WritePatientRequest {
            surname: "Silva".into(),
            name: "Ana".into(),
            rg: "44.555.666-7".into(),
            registration_date: "2023-01-15".into(),
        };
        assert!(req.validate().is_ok());
    }

    #[test_case(None ; "absent field stays unset")]
    #[test_case(Some(String::new()) ; "empty string stays unset")]
    fn patch_patient_treats_empty_as_unset(surname: Option<String>) {
        let req = PatchPatientRequest {
            surname,
            ..Default::default()
        };
        let dto = PatientPatchDto::from(req);
        assert!(dto.surname.is_none());
    }

    #[test]
    fn patch_dentist_keeps_supplied_fields() {
        let req = PatchDentistRequest {
            registration: Some("MP-999".into()),
            ..Default::default()
        };
        let dto = DentistPatchDto::from(req);
        assert_eq!(dto.registration.as_deref(), Some("MP-999"));
        assert!(dto.surname.is_none());
    }

    #[test_case(0, 3 ; "zero patient id")]
    #[test_case(7, 0 ; "zero dentist id")]
    fn update_appointment_rejects_zero_references(patient_id: i64, dentist_id: i64) {
        let req = UpdateAppointmentRequest {
            patient_id,
            dentist_id,
            date: "2024-03-10".into(),
            description: "cleaning".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn patch_appointment_defaults_absent_fields_to_zero_values() {
        let req: PatchAppointmentRequest =
            serde_json::from_str(r#"{"description":"rescheduled"}"#).unwrap();
        let dto = WriteAppointmentDto::from(req);
        assert_eq!(dto.patient_id, 0);
        assert_eq!(dto.dentist_id, 0);
        assert!(dto.date.is_empty());
        assert_eq!(dto.description, "rescheduled");
    }
}
