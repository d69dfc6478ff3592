//! Customer Submission Entity
//!
//! The payload delivered upstream once a record has been validated.

use serde::Serialize;

use crate::domain::entity::candidate::{CandidateRecord, ValidatedRecord};

/// Customer classification sent as the `type` discriminator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerType {
    #[default]
    Individual,
}

impl CustomerType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CustomerType::Individual => "INDIVIDUAL",
        }
    }
}

impl std::fmt::Display for CustomerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upstream payload: `{"type": "INDIVIDUAL", "firstName": ..., ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSubmission {
    #[serde(rename = "type")]
    customer_type: CustomerType,
    #[serde(flatten)]
    record: CandidateRecord,
}

impl CustomerSubmission {
    /// Build the payload from a validated record
    pub fn new(customer_type: CustomerType, validated: ValidatedRecord) -> Self {
        Self {
            customer_type,
            record: validated.into_inner(),
        }
    }

    pub fn customer_type(&self) -> CustomerType {
        self.customer_type
    }

    pub fn record(&self) -> &CandidateRecord {
        &self.record
    }
}

/// What the upstream endpoint answered
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub upstream_status: u16,
    /// Opaque upstream response body, `null` when empty or not JSON
    pub upstream_body: serde_json::Value,
}
