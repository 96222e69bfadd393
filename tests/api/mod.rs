//! REST API endpoint tests

mod appointment_tests;
mod dentist_tests;
mod health_tests;
mod patient_tests;
