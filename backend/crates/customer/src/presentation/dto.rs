//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::{CandidateRecord, CustomerSubmission, ValidatedRecord};

// ============================================================================
// Customer Request
// ============================================================================

/// Intake form body shared by `/validate` and submit
///
/// Optional keys may be omitted and read as the empty string. The required
/// keys must be present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    #[serde(default)]
    pub egn: String,
    pub address: String,
    pub postcode: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
}

impl From<CustomerRequest> for CandidateRecord {
    fn from(req: CustomerRequest) -> Self {
        CandidateRecord {
            first_name: req.first_name,
            middle_name: req.middle_name,
            last_name: req.last_name,
            egn: req.egn,
            address: req.address,
            postcode: req.postcode,
            phone_number: req.phone_number,
            email: req.email,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Validate response (success side)
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    pub ok: bool,
    pub value: ValidatedRecord,
}

impl ValidationResponse {
    pub fn accepted(value: ValidatedRecord) -> Self {
        Self { ok: true, value }
    }
}

/// Submit response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub ok: bool,
    pub submission: CustomerSubmission,
    pub upstream_status: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_keys_default_to_empty() {
        let req: CustomerRequest = serde_json::from_str(
            r#"{"firstName":"Ivan","lastName":"Ivanov","address":"Sofia","postcode":"1000"}"#,
        )
        .unwrap();
        let record = CandidateRecord::from(req);
        assert_eq!(record.first_name, "Ivan");
        assert_eq!(record.middle_name, "");
        assert_eq!(record.egn, "");
        assert_eq!(record.phone_number, "");
        assert_eq!(record.email, "");
    }

    #[test]
    fn test_required_key_missing() {
        let result = serde_json::from_str::<CustomerRequest>(
            r#"{"firstName":"Ivan","lastName":"Ivanov","address":"Sofia"}"#,
        );
        assert!(result.unwrap_err().to_string().contains("postcode"));
    }
}
