//! Entity Module

pub mod candidate;
pub mod submission;

pub use candidate::{CandidateRecord, ValidatedRecord};
pub use submission::{CustomerSubmission, CustomerType, SubmissionReceipt};
