//! Intake Validation Rules
//!
//! The field rule table and the cross-field rules for a [`CandidateRecord`].
//!
//! ## Field rules
//! | Field | Optional | Checks |
//! |---|---|---|
//! | firstName, middleName, lastName | middleName | 2..=64 long, `[A-Za-z' -]` only |
//! | egn | yes | ten digits, valid EGN |
//! | address | no | 2..=255 long |
//! | postcode | no | four characters, all digits |
//! | phoneNumber | yes | `+` or `00` then 9..=16 digits |
//! | email | yes | email format |
//!
//! Lengths are counted in UTF-16 code units, the unit the browser form uses.
//!
//! ## Cross-field rules (in order, first failure reported)
//! 1. Phone number or email must be present (reported on `phoneNumber`)
//! 2. An address in Sofia requires postcode `1000` (reported on `postcode`)

use kernel::validation::{
    Check, FieldRule, RecordRule, ValidationErrors, ValidationResult, validate_record,
};
use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entity::{CandidateRecord, ValidatedRecord};
use crate::domain::value_object::{FieldPath, is_valid_egn, is_valid_email};

// ============================================================================
// Messages
// ============================================================================

pub const MSG_NAME_TOO_SHORT: &str = "Must be at least 2 characters";
pub const MSG_NAME_TOO_LONG: &str = "Must be at most 64 characters";
pub const MSG_NAME_CHARACTERS: &str = "Only letters, apostrophes, hyphens, and spaces allowed";
pub const MSG_EGN_DIGITS: &str = "EGN must be exactly 10 digits";
pub const MSG_EGN_INVALID: &str = "Invalid Bulgarian EGN format";
pub const MSG_ADDRESS_TOO_SHORT: &str = "Address must be at least 2 characters";
pub const MSG_ADDRESS_TOO_LONG: &str = "Address cannot exceed 255 characters";
pub const MSG_POSTCODE_LENGTH: &str = "Postcode must be exactly 4 digits";
pub const MSG_POSTCODE_DIGITS: &str = "Postcode must contain only digits";
pub const MSG_PHONE_INVALID: &str = "Invalid phone number";
pub const MSG_EMAIL_INVALID: &str = "Invalid email format";
pub const MSG_CONTACT_REQUIRED: &str = "Either phone number or email is required";
pub const MSG_POSTCODE_CITY_MISMATCH: &str = "Your postal code and city don't match";

/// City whose presence in the address pins the postcode
const SOFIA: &str = "sofia";
const SOFIA_POSTCODE: &str = "1000";

// ============================================================================
// Patterns
// ============================================================================

static PERSON_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z' -]+$").expect("person name pattern is valid"));

static TEN_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("EGN pattern is valid"));

static FOUR_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("postcode pattern is valid"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+|00)[0-9]{9,16}$").expect("phone pattern is valid"));

// ============================================================================
// Predicates
// ============================================================================

#[inline]
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn len_at_least<const MIN: usize>(value: &str) -> bool {
    utf16_len(value) >= MIN
}

fn len_at_most<const MAX: usize>(value: &str) -> bool {
    utf16_len(value) <= MAX
}

fn len_exactly<const LEN: usize>(value: &str) -> bool {
    utf16_len(value) == LEN
}

fn is_person_name(value: &str) -> bool {
    PERSON_NAME_RE.is_match(value)
}

fn is_ten_digits(value: &str) -> bool {
    TEN_DIGITS_RE.is_match(value)
}

fn is_four_digits(value: &str) -> bool {
    FOUR_DIGITS_RE.is_match(value)
}

fn is_phone_number(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

// ============================================================================
// Rule tables
// ============================================================================

const PERSON_NAME_CHECKS: &[Check] = &[
    Check::new(len_at_least::<2>, MSG_NAME_TOO_SHORT),
    Check::new(len_at_most::<64>, MSG_NAME_TOO_LONG),
    Check::new(is_person_name, MSG_NAME_CHARACTERS),
];

const EGN_CHECKS: &[Check] = &[
    Check::new(is_ten_digits, MSG_EGN_DIGITS),
    Check::new(is_valid_egn, MSG_EGN_INVALID),
];

const ADDRESS_CHECKS: &[Check] = &[
    Check::new(len_at_least::<2>, MSG_ADDRESS_TOO_SHORT),
    Check::new(len_at_most::<255>, MSG_ADDRESS_TOO_LONG),
];

const POSTCODE_CHECKS: &[Check] = &[
    Check::new(len_exactly::<4>, MSG_POSTCODE_LENGTH),
    Check::new(is_four_digits, MSG_POSTCODE_DIGITS),
];

const PHONE_CHECKS: &[Check] = &[Check::new(is_phone_number, MSG_PHONE_INVALID)];

const EMAIL_CHECKS: &[Check] = &[Check::new(is_valid_email, MSG_EMAIL_INVALID)];

/// One rule per field, in form order
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule::required(FieldPath::FirstName.as_str(), PERSON_NAME_CHECKS),
    FieldRule::optional(FieldPath::MiddleName.as_str(), PERSON_NAME_CHECKS),
    FieldRule::required(FieldPath::LastName.as_str(), PERSON_NAME_CHECKS),
    FieldRule::optional(FieldPath::Egn.as_str(), EGN_CHECKS),
    FieldRule::required(FieldPath::Address.as_str(), ADDRESS_CHECKS),
    FieldRule::required(FieldPath::Postcode.as_str(), POSTCODE_CHECKS),
    FieldRule::optional(FieldPath::PhoneNumber.as_str(), PHONE_CHECKS),
    FieldRule::optional(FieldPath::Email.as_str(), EMAIL_CHECKS),
];

fn has_contact(record: &CandidateRecord) -> bool {
    record.has_contact()
}

/// Single-city stand-in for postcode/city consistency
fn postcode_matches_city(record: &CandidateRecord) -> bool {
    !record.address.to_lowercase().contains(SOFIA) || record.postcode == SOFIA_POSTCODE
}

/// Whole-record rules, evaluated in order after every field passed
pub const CROSS_FIELD_RULES: &[RecordRule<CandidateRecord>] = &[
    RecordRule::new(
        FieldPath::PhoneNumber.as_str(),
        MSG_CONTACT_REQUIRED,
        has_contact,
    ),
    RecordRule::new(
        FieldPath::Postcode.as_str(),
        MSG_POSTCODE_CITY_MISMATCH,
        postcode_matches_city,
    ),
];

// ============================================================================
// Entry points
// ============================================================================

/// Validate a complete record
///
/// Field rules first, all fields reported together; then cross-field rules,
/// only the first failure reported. Never panics on any input values.
pub fn validate(record: CandidateRecord) -> ValidationResult<ValidatedRecord> {
    validate_record(record, FIELD_RULES, CROSS_FIELD_RULES).map(ValidatedRecord::new)
}

/// Validate one field in isolation
pub fn validate_field(field: FieldPath, value: &str) -> Result<(), &'static str> {
    field_rule(field).check(value)
}

/// Run the cross-field rules alone
///
/// Meant for records whose fields already passed [`validate_field`].
pub fn validate_cross_field(record: &CandidateRecord) -> ValidationResult<()> {
    match CROSS_FIELD_RULES.iter().find(|r| !(r.predicate)(record)) {
        Some(failed) => Err(ValidationErrors::single(failed.field, failed.message)),
        None => Ok(()),
    }
}

fn field_rule(field: FieldPath) -> &'static FieldRule {
    // FIELD_RULES follows FieldPath::ALL order
    &FIELD_RULES[field as usize]
}
