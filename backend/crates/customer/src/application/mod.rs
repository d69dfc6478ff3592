//! Application Layer
//!
//! Use cases and application configuration.

pub mod config;
pub mod submit_customer;
pub mod validate_customer;

// Re-exports
pub use config::CustomerConfig;
pub use submit_customer::{SubmitCustomerOutput, SubmitCustomerUseCase};
pub use validate_customer::ValidateCustomerUseCase;
