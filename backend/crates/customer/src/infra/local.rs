//! Local Gateway Implementation

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entity::{CustomerSubmission, SubmissionReceipt};
use crate::domain::gateway::CustomerGateway;
use crate::error::CustomerResult;

/// Status reported for every accepted submission
const ACCEPTED: u16 = 202;

/// Gateway used when no upstream URL is configured
///
/// Accepts every submission and drops the payload. Only a running count is
/// kept, so no personal data outlives the request.
#[derive(Debug, Default)]
pub struct DiscardingGateway {
    accepted: AtomicU64,
}

impl DiscardingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submissions accepted since startup
    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }
}

impl CustomerGateway for DiscardingGateway {
    async fn submit(&self, submission: &CustomerSubmission) -> CustomerResult<SubmissionReceipt> {
        let total = self.accepted.fetch_add(1, Ordering::Relaxed) + 1;

        tracing::info!(
            customer_type = %submission.customer_type(),
            accepted_total = total,
            "Customer submission accepted without upstream"
        );

        Ok(SubmissionReceipt {
            upstream_status: ACCEPTED,
            upstream_body: serde_json::Value::Null,
        })
    }
}
