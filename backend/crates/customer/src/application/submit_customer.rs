//! Submit Customer Use Case
//!
//! Validates a record and delivers it to the upstream endpoint.

use std::sync::Arc;

use crate::application::config::CustomerConfig;
use crate::domain::entity::{CandidateRecord, CustomerSubmission, SubmissionReceipt};
use crate::domain::gateway::CustomerGateway;
use crate::domain::rules;
use crate::error::CustomerResult;

/// Submit customer output
#[derive(Debug, Clone)]
pub struct SubmitCustomerOutput {
    pub submission: CustomerSubmission,
    pub receipt: SubmissionReceipt,
}

/// Submit customer use case
pub struct SubmitCustomerUseCase<G>
where
    G: CustomerGateway,
{
    gateway: Arc<G>,
    config: Arc<CustomerConfig>,
}

impl<G> SubmitCustomerUseCase<G>
where
    G: CustomerGateway,
{
    pub fn new(gateway: Arc<G>, config: Arc<CustomerConfig>) -> Self {
        Self { gateway, config }
    }

    /// Nothing reaches the gateway unless every rule passed
    pub async fn execute(&self, record: CandidateRecord) -> CustomerResult<SubmitCustomerOutput> {
        let validated = rules::validate(record)?;
        let submission = CustomerSubmission::new(self.config.customer_type, validated);

        let receipt = self.gateway.submit(&submission).await?;

        tracing::info!(
            customer_type = %submission.customer_type(),
            upstream_status = receipt.upstream_status,
            "Customer submission accepted"
        );

        Ok(SubmitCustomerOutput {
            submission,
            receipt,
        })
    }
}
