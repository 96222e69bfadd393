//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod appointment;
pub mod dentist;
pub mod health;
pub mod patient;
