//! Field Path Value Object
//!
//! Identifies one field of the intake form. The string form is the
//! camelCase key used on the wire and in error mappings.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the eight intake form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldPath {
    #[display("firstName")]
    FirstName,
    #[display("middleName")]
    MiddleName,
    #[display("lastName")]
    LastName,
    #[display("egn")]
    Egn,
    #[display("address")]
    Address,
    #[display("postcode")]
    Postcode,
    #[display("phoneNumber")]
    PhoneNumber,
    #[display("email")]
    Email,
}

impl FieldPath {
    /// All fields in form order
    pub const ALL: [FieldPath; 8] = [
        FieldPath::FirstName,
        FieldPath::MiddleName,
        FieldPath::LastName,
        FieldPath::Egn,
        FieldPath::Address,
        FieldPath::Postcode,
        FieldPath::PhoneNumber,
        FieldPath::Email,
    ];

    /// Wire key for this field
    pub const fn as_str(&self) -> &'static str {
        match self {
            FieldPath::FirstName => "firstName",
            FieldPath::MiddleName => "middleName",
            FieldPath::LastName => "lastName",
            FieldPath::Egn => "egn",
            FieldPath::Address => "address",
            FieldPath::Postcode => "postcode",
            FieldPath::PhoneNumber => "phoneNumber",
            FieldPath::Email => "email",
        }
    }

    /// Whether the empty string is an accepted value (field not provided)
    pub const fn is_optional(&self) -> bool {
        matches!(
            self,
            FieldPath::MiddleName | FieldPath::Egn | FieldPath::PhoneNumber | FieldPath::Email
        )
    }
}

/// Error returned for an unknown field key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldPath {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPath::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_wire_key() {
        for field in FieldPath::ALL {
            assert_eq!(field.to_string(), field.as_str());
        }
    }

    #[test]
    fn test_serde_matches_wire_key() {
        for field in FieldPath::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn test_from_str_round_trip() {
        for field in FieldPath::ALL {
            assert_eq!(field.as_str().parse::<FieldPath>(), Ok(field));
        }
        assert!(matches!("first_name".parse::<FieldPath>(), Err(UnknownField(_))));
    }

    #[test]
    fn test_optional_fields() {
        let optional: Vec<_> = FieldPath::ALL.into_iter().filter(|f| f.is_optional()).collect();
        assert_eq!(
            optional,
            vec![
                FieldPath::MiddleName,
                FieldPath::Egn,
                FieldPath::PhoneNumber,
                FieldPath::Email
            ]
        );
    }
}
