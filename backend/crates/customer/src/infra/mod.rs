//! Infrastructure Layer
//!
//! Upstream gateway implementations.

pub mod http;
pub mod local;

pub use http::HttpCustomerGateway;
pub use local::DiscardingGateway;
