//! Customer Intake Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Candidate record, rule tables, EGN checksum, gateway trait
//! - `application/` - Use cases and configuration
//! - `infra/` - Upstream gateway implementations (HTTP, local fallback)
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Field rules reported per field, all at once
//! - Cross-field rules (contact channel, Sofia postcode) reported one at a time
//! - Bulgarian EGN checksum and birth-date verification
//! - Single-attempt delivery of accepted records upstream
//!
//! ## Privacy
//! - Logs carry field paths and statuses, never submitted values
//! - Without an upstream, accepted submissions are counted and dropped

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::CustomerConfig;
pub use domain::{
    CandidateRecord, CustomerSubmission, CustomerType, FieldPath, ValidatedRecord, validate,
    validate_cross_field, validate_field,
};
pub use error::{CustomerError, CustomerResult};
pub use infra::{DiscardingGateway, HttpCustomerGateway};
pub use presentation::router::{customer_router, customer_router_generic, customer_router_shared};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
pub use kernel::validation::{ValidationErrors, ValidationResult};
