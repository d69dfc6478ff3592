//! Value Object Module

pub mod egn;
pub mod email;
pub mod field_path;

pub use egn::{Century, Egn, EgnDecoded, EgnError, is_valid_egn};
pub use email::is_valid_email;
pub use field_path::{FieldPath, UnknownField};
