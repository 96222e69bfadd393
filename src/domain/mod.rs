//! # Domain Layer
//!
//! The domain layer contains the core business objects of the clinic backend.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (Patient, Dentist, Appointment)
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities are transient value copies of persisted rows

pub mod entities;

// Re-export commonly used types
pub use entities::*;
