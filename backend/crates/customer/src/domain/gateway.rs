//! Gateway Traits
//!
//! Interface to the upstream customer endpoint. Implementations are in the
//! infrastructure layer.

use crate::domain::entity::{CustomerSubmission, SubmissionReceipt};
use crate::error::CustomerResult;

/// Upstream customer gateway trait
///
/// One delivery attempt per call. The response body is handed back as-is.
#[trait_variant::make(CustomerGateway: Send)]
pub trait LocalCustomerGateway {
    /// Deliver a validated submission
    async fn submit(&self, submission: &CustomerSubmission) -> CustomerResult<SubmissionReceipt>;
}
