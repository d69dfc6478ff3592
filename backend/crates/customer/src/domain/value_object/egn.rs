//! EGN Value Object
//!
//! EGN (ЕГН) is the 10-digit Bulgarian personal identification number.
//!
//! ## Layout
//! ```text
//! Y Y M M D D R R R C
//! │ │ │ │ │ │ │ │ │ └ checksum digit
//! │ │ │ │ │ │ └─┴─┴── region / sequence
//! │ │ │ │ └─┴──────── day of birth
//! │ │ └─┴──────────── month of birth, offset by century
//! └─┴──────────────── year of birth within the century
//! ```
//!
//! ## Century encoding
//! - month 1..=12: born 1900-1999
//! - month 21..=32: born 2000-2099 (month - 20)
//! - month 41..=52: born 1800-1899 (month - 40)
//!
//! ## Checksum
//! Digits 0..9 are multiplied by [`WEIGHTS`] positionally and summed. The
//! check digit is `sum % 11 % 10`; a remainder of 10 folds to 0.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits in an EGN
pub const EGN_LENGTH: usize = 10;

/// Positional checksum weights for digits 0..9
pub const WEIGHTS: [u32; 9] = [2, 4, 8, 5, 10, 9, 7, 3, 6];

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when an EGN fails validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EgnError {
    /// Not exactly ten ASCII digits
    #[error("EGN must be exactly {EGN_LENGTH} digits")]
    InvalidFormat,

    /// Encoded birth date does not exist in the calendar
    #[error("EGN encodes an impossible birth date ({year}-{month:02}-{day:02})")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Check digit does not match the weighted sum
    #[error("EGN checksum mismatch: expected {expected}, found {actual}")]
    ChecksumMismatch { expected: u8, actual: u8 },
}

// ============================================================================
// Century
// ============================================================================

/// Birth century, derived from the month offset band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Century {
    /// 1800-1899, month encoded as month + 40
    Nineteenth,
    /// 1900-1999, month encoded unchanged
    Twentieth,
    /// 2000-2099, month encoded as month + 20
    TwentyFirst,
}

impl Century {
    /// Split an encoded month into its century and calendar month
    ///
    /// Bands are checked from the highest offset down, so any month above
    /// 40 belongs to the 1800s and any month above 20 to the 2000s.
    pub const fn from_encoded_month(month: u32) -> (Century, u32) {
        if month > 40 {
            (Century::Nineteenth, month - 40)
        } else if month > 20 {
            (Century::TwentyFirst, month - 20)
        } else {
            (Century::Twentieth, month)
        }
    }

    /// First year of the century
    pub const fn base_year(&self) -> i32 {
        match self {
            Century::Nineteenth => 1800,
            Century::Twentieth => 1900,
            Century::TwentyFirst => 2000,
        }
    }
}

// ============================================================================
// Decoded view
// ============================================================================

/// Birth date information decoded from the first six digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EgnDecoded {
    /// Digits 0-1
    pub year: u32,
    /// Digits 2-3, including the century offset
    pub encoded_month: u32,
    /// Digits 4-5
    pub day: u32,
    /// Month with the century offset removed
    pub birth_month: u32,
    pub century: Century,
    /// Century base + year
    pub full_year: i32,
    pub birth_date: NaiveDate,
}

// ============================================================================
// Egn Value Object
// ============================================================================

/// Validated EGN
///
/// # Invariants
/// - Exactly ten ASCII digits
/// - Digits 0-5 encode an existing calendar date
/// - Digit 9 equals the weighted checksum of digits 0-8
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Egn {
    digits: [u8; EGN_LENGTH],
    decoded: EgnDecoded,
}

impl Egn {
    /// Parse and validate an EGN
    ///
    /// Checks run in order: format, birth date, checksum.
    pub fn parse(input: &str) -> Result<Self, EgnError> {
        let digits = Self::parse_digits(input)?;
        let decoded = Self::decode(&digits)?;

        let expected = Self::checksum(&digits);
        let actual = digits[EGN_LENGTH - 1];
        if expected != actual {
            return Err(EgnError::ChecksumMismatch { expected, actual });
        }

        Ok(Self { digits, decoded })
    }

    /// Compute the check digit for the first nine digits
    pub fn checksum(digits: &[u8; EGN_LENGTH]) -> u8 {
        let sum: u32 = digits
            .iter()
            .zip(WEIGHTS.iter())
            .map(|(&d, &w)| u32::from(d) * w)
            .sum();
        (sum % 11 % 10) as u8
    }

    /// Decoded birth information
    #[inline]
    pub fn decoded(&self) -> &EgnDecoded {
        &self.decoded
    }

    /// Calendar date of birth
    #[inline]
    pub fn birth_date(&self) -> NaiveDate {
        self.decoded.birth_date
    }

    /// The ten digits as a string
    pub fn as_string(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    fn parse_digits(input: &str) -> Result<[u8; EGN_LENGTH], EgnError> {
        let bytes = input.as_bytes();
        if bytes.len() != EGN_LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(EgnError::InvalidFormat);
        }
        let mut digits = [0u8; EGN_LENGTH];
        for (slot, b) in digits.iter_mut().zip(bytes) {
            *slot = b - b'0';
        }
        Ok(digits)
    }

    fn decode(digits: &[u8; EGN_LENGTH]) -> Result<EgnDecoded, EgnError> {
        let pair = |i: usize| u32::from(digits[i]) * 10 + u32::from(digits[i + 1]);
        let year = pair(0);
        let encoded_month = pair(2);
        let day = pair(4);

        let (century, birth_month) = Century::from_encoded_month(encoded_month);
        let full_year = century.base_year() + year as i32;

        // from_ymd_opt never normalizes overflowing parts, so Some means the
        // date round-trips exactly
        let birth_date =
            NaiveDate::from_ymd_opt(full_year, birth_month, day).ok_or(EgnError::InvalidDate {
                year: full_year,
                month: birth_month,
                day,
            })?;

        Ok(EgnDecoded {
            year,
            encoded_month,
            day,
            birth_month,
            century,
            full_year,
            birth_date,
        })
    }
}

/// Whether `input` is a well-formed EGN with a real birth date and a
/// matching check digit
pub fn is_valid_egn(input: &str) -> bool {
    Egn::parse(input).is_ok()
}

impl FromStr for Egn {
    type Err = EgnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Egn::parse(s)
    }
}

impl TryFrom<&str> for Egn {
    type Error = EgnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Egn::parse(value)
    }
}

impl fmt::Display for Egn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl Serialize for Egn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod century_bands {
        use super::*;

        #[test]
        fn test_twentieth_century() {
            let egn = Egn::parse("8505031239").unwrap();
            let decoded = egn.decoded();
            assert_eq!(decoded.century, Century::Twentieth);
            assert_eq!(decoded.full_year, 1985);
            assert_eq!(decoded.birth_month, 5);
            assert_eq!(egn.birth_date(), ymd(1985, 5, 3));
        }

        #[test]
        fn test_twenty_first_century() {
            let egn = Egn::parse("7523169263").unwrap();
            let decoded = egn.decoded();
            assert_eq!(decoded.year, 75);
            assert_eq!(decoded.encoded_month, 23);
            assert_eq!(decoded.century, Century::TwentyFirst);
            assert_eq!(decoded.full_year, 2075);
            assert_eq!(decoded.birth_month, 3);
            assert_eq!(decoded.day, 16);
            assert_eq!(egn.birth_date(), ymd(2075, 3, 16));
        }

        #[test]
        fn test_nineteenth_century() {
            let egn = Egn::parse("9945123454").unwrap();
            assert_eq!(egn.decoded().century, Century::Nineteenth);
            assert_eq!(egn.birth_date(), ymd(1899, 5, 12));
        }

        #[test]
        fn test_band_boundaries() {
            assert_eq!(Century::from_encoded_month(12), (Century::Twentieth, 12));
            assert_eq!(Century::from_encoded_month(20), (Century::Twentieth, 20));
            assert_eq!(Century::from_encoded_month(21), (Century::TwentyFirst, 1));
            assert_eq!(Century::from_encoded_month(40), (Century::TwentyFirst, 20));
            assert_eq!(Century::from_encoded_month(41), (Century::Nineteenth, 1));
        }
    }

    mod checksum {
        use super::*;

        #[test]
        fn test_broken_check_digit_per_band() {
            assert!(matches!(
                Egn::parse("8505031230"),
                Err(EgnError::ChecksumMismatch { expected: 9, actual: 0 })
            ));
            assert!(matches!(
                Egn::parse("7523169264"),
                Err(EgnError::ChecksumMismatch { expected: 3, actual: 4 })
            ));
            assert!(matches!(
                Egn::parse("0441012341"),
                Err(EgnError::ChecksumMismatch { expected: 0, actual: 1 })
            ));
        }

        #[test]
        fn test_remainder_ten_folds_to_zero() {
            // 0*2 + 4*4 + 4*8 + 1*5 + 0*10 + 1*9 + 2*7 + 3*3 + 4*6 = 109, 109 % 11 = 10
            let egn = Egn::parse("0441012340").unwrap();
            assert_eq!(egn.birth_date(), ymd(1804, 1, 1));
        }

        #[test]
        fn test_weights_are_positional() {
            let digits = [7, 5, 2, 3, 1, 6, 9, 2, 6, 0];
            // 14 + 20 + 16 + 15 + 10 + 54 + 63 + 6 + 36 = 234, 234 % 11 = 3
            assert_eq!(Egn::checksum(&digits), 3);

            let reversed = [6, 2, 9, 6, 1, 3, 2, 5, 7, 0];
            assert_ne!(Egn::checksum(&reversed), Egn::checksum(&digits));
        }
    }

    mod birth_date {
        use super::*;

        #[test]
        fn test_non_leap_february_29() {
            // Check digit is correct; only the date is impossible
            assert!(matches!(
                Egn::parse("8102290123"),
                Err(EgnError::InvalidDate { year: 1981, month: 2, day: 29 })
            ));
        }

        #[test]
        fn test_century_year_not_leap() {
            assert!(matches!(
                Egn::parse("0002291230"),
                Err(EgnError::InvalidDate { year: 1900, .. })
            ));
        }

        #[test]
        fn test_leap_days() {
            assert_eq!(Egn::parse("8002290120").unwrap().birth_date(), ymd(1980, 2, 29));
            assert_eq!(Egn::parse("0022291234").unwrap().birth_date(), ymd(2000, 2, 29));
        }

        #[test]
        fn test_month_thirteen_after_offset() {
            assert!(matches!(
                Egn::parse("0253041239"),
                Err(EgnError::InvalidDate { month: 13, .. })
            ));
        }

        #[test]
        fn test_zero_month_and_day() {
            assert!(matches!(Egn::parse("8505001234"), Err(EgnError::InvalidDate { .. })));
            assert!(matches!(Egn::parse("8500031234"), Err(EgnError::InvalidDate { month: 0, .. })));
            // 40 falls in the 2000s band and leaves month 20
            assert!(matches!(Egn::parse("8540031234"), Err(EgnError::InvalidDate { month: 20, .. })));
        }

        #[test]
        fn test_april_thirty_first() {
            assert!(matches!(Egn::parse("8504311234"), Err(EgnError::InvalidDate { .. })));
        }
    }

    mod format {
        use super::*;

        #[test]
        fn test_wrong_length() {
            assert_eq!(Egn::parse(""), Err(EgnError::InvalidFormat));
            assert_eq!(Egn::parse("850503123"), Err(EgnError::InvalidFormat));
            assert_eq!(Egn::parse("85050312390"), Err(EgnError::InvalidFormat));
        }

        #[test]
        fn test_non_digits() {
            assert_eq!(Egn::parse("85050312a9"), Err(EgnError::InvalidFormat));
            assert_eq!(Egn::parse(" 850503123"), Err(EgnError::InvalidFormat));
            // Arabic-Indic digits are not ASCII digits
            assert_eq!(Egn::parse("٨٥٠٥٠٣١٢٣٩"), Err(EgnError::InvalidFormat));
        }
    }

    mod conversions {
        use super::*;

        #[test]
        fn test_display_and_serialize() {
            let egn: Egn = "7523169263".parse().unwrap();
            assert_eq!(egn.to_string(), "7523169263");
            assert_eq!(serde_json::to_string(&egn).unwrap(), "\"7523169263\"");
        }

        #[test]
        fn test_is_valid_egn() {
            assert!(is_valid_egn("7523169263"));
            assert!(is_valid_egn("0441012340"));
            assert!(!is_valid_egn("7523169264"));
            assert!(!is_valid_egn("abc"));
        }

        #[test]
        fn test_error_messages() {
            assert_eq!(EgnError::InvalidFormat.to_string(), "EGN must be exactly 10 digits");
            let err = EgnError::InvalidDate { year: 1981, month: 2, day: 29 };
            assert!(err.to_string().contains("1981-02-29"));
        }
    }
}
