//! Candidate Record Entity
//!
//! The raw intake form contents, before and after validation.

use kernel::validation::FieldSource;
use serde::Serialize;
use std::ops::Deref;

use crate::domain::value_object::FieldPath;

/// Raw intake form values
///
/// Optional fields (`middle_name`, `egn`, `phone_number`, `email`) use the
/// empty string for "not provided". Required fields are enforced by the
/// rule set, not by the type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub egn: String,
    pub address: String,
    pub postcode: String,
    pub phone_number: String,
    pub email: String,
}

impl CandidateRecord {
    /// Value of one field
    pub fn field(&self, path: FieldPath) -> &str {
        match path {
            FieldPath::FirstName => &self.first_name,
            FieldPath::MiddleName => &self.middle_name,
            FieldPath::LastName => &self.last_name,
            FieldPath::Egn => &self.egn,
            FieldPath::Address => &self.address,
            FieldPath::Postcode => &self.postcode,
            FieldPath::PhoneNumber => &self.phone_number,
            FieldPath::Email => &self.email,
        }
    }

    /// Whether the customer can be reached by phone or email
    pub fn has_contact(&self) -> bool {
        !self.phone_number.is_empty() || !self.email.is_empty()
    }
}

impl FieldSource for CandidateRecord {
    fn field_value(&self, field: &str) -> Option<&str> {
        field.parse::<FieldPath>().ok().map(|path| self.field(path))
    }
}

/// A record that passed every field rule and cross-field rule
///
/// Only produced by [`crate::domain::rules::validate`]; the wrapped record is
/// unchanged from the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedRecord(CandidateRecord);

impl ValidatedRecord {
    pub(crate) fn new(record: CandidateRecord) -> Self {
        Self(record)
    }

    pub fn record(&self) -> &CandidateRecord {
        &self.0
    }

    pub fn into_inner(self) -> CandidateRecord {
        self.0
    }
}

impl Deref for ValidatedRecord {
    type Target = CandidateRecord;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
