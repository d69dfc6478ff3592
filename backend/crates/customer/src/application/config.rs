//! Application Configuration
//!
//! Configuration for the Customer application layer.

use std::env;
use std::time::Duration;

use crate::domain::entity::CustomerType;
use crate::error::{CustomerError, CustomerResult};

pub const UPSTREAM_URL_VAR: &str = "CUSTOMER_UPSTREAM_URL";
pub const UPSTREAM_TIMEOUT_VAR: &str = "CUSTOMER_UPSTREAM_TIMEOUT_SECS";

/// Customer application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerConfig {
    /// Discriminator sent with every submission
    pub customer_type: CustomerType,
    /// Upstream submission endpoint; `None` accepts and drops submissions
    pub upstream_url: Option<String>,
    /// Per-request upstream timeout (10 seconds)
    pub upstream_timeout: Duration,
}

impl Default for CustomerConfig {
    fn default() -> Self {
        Self {
            customer_type: CustomerType::Individual,
            upstream_url: None,
            upstream_timeout: Duration::from_secs(10),
        }
    }
}

impl CustomerConfig {
    /// Create config for development (no upstream, short timeout)
    pub fn development() -> Self {
        Self {
            upstream_timeout: Duration::from_secs(3),
            ..Default::default()
        }
    }

    /// Read `CUSTOMER_UPSTREAM_URL` and `CUSTOMER_UPSTREAM_TIMEOUT_SECS`
    pub fn from_env() -> CustomerResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> CustomerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let upstream_url = lookup(UPSTREAM_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let upstream_timeout = match lookup(UPSTREAM_TIMEOUT_VAR) {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    CustomerError::Internal(format!("{UPSTREAM_TIMEOUT_VAR} must be whole seconds: {e}"))
                })?;
                if secs == 0 {
                    return Err(CustomerError::Internal(format!(
                        "{UPSTREAM_TIMEOUT_VAR} must be greater than zero"
                    )));
                }
                Duration::from_secs(secs)
            }
            None => defaults.upstream_timeout,
        };

        Ok(Self {
            upstream_url,
            upstream_timeout,
            ..defaults
        })
    }

    /// Whether submissions are forwarded over HTTP
    pub fn has_upstream(&self) -> bool {
        self.upstream_url.is_some()
    }
}
