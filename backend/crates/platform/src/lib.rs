//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Client identification from request headers
//! - Outbound JSON HTTP client for upstream services

pub mod client;
pub mod http_client;
