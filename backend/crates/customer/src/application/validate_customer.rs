//! Validate Customer Use Case
//!
//! Runs the full rule set without submitting anything.

use crate::domain::entity::{CandidateRecord, ValidatedRecord};
use crate::domain::rules;
use crate::error::CustomerResult;

/// Validate customer use case
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateCustomerUseCase;

impl ValidateCustomerUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, record: CandidateRecord) -> CustomerResult<ValidatedRecord> {
        let validated = rules::validate(record)?;
        tracing::debug!("Customer record passed validation");
        Ok(validated)
    }
}
