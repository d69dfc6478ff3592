//! Domain Layer
//!
//! Contains entities, value objects, validation rules, and the upstream
//! gateway trait.

pub mod entity;
pub mod gateway;
pub mod rules;
pub mod value_object;

// Re-exports
pub use entity::{CandidateRecord, CustomerSubmission, CustomerType, SubmissionReceipt, ValidatedRecord};
pub use gateway::CustomerGateway;
pub use rules::{validate, validate_cross_field, validate_field};
pub use value_object::FieldPath;
