//! Client identification utilities
//!
//! Derives who sent a request from HTTP headers, for log context only.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

/// Maximum User-Agent length kept for logging
const USER_AGENT_MAX_LENGTH: usize = 256;

/// Request origin as seen through headers and the connection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    /// Client IP address (from X-Forwarded-For or direct connection)
    pub ip: Option<IpAddr>,
    /// User-Agent header, truncated to a bounded length
    pub user_agent: Option<String>,
}

impl ClientInfo {
    /// IP as string, `"unknown"` when not determinable
    pub fn ip_string(&self) -> String {
        self.ip
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Collect client information from request headers
///
/// ## Arguments
/// * `headers` - HTTP request headers
/// * `direct_ip` - Direct connection IP address, if known
pub fn extract_client_info(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> ClientInfo {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|ua| ua.chars().take(USER_AGENT_MAX_LENGTH).collect());

    ClientInfo {
        ip: extract_client_ip(headers, direct_ip),
        user_agent,
    }
}

const FORWARDED_FOR: &str = "x-forwarded-for";
const REAL_IP: &str = "x-real-ip";

/// Extract client IP address from headers
///
/// Order: first X-Forwarded-For entry, then X-Real-IP, then the direct
/// connection address. Unparseable header values are skipped.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    header_ip(headers, FORWARDED_FOR, |v| v.split(',').next())
        .or_else(|| header_ip(headers, REAL_IP, Some))
        .or(direct_ip)
}

fn header_ip<'a>(
    headers: &'a HeaderMap,
    name: &str,
    pick: impl FnOnce(&'a str) -> Option<&'a str>,
) -> Option<IpAddr> {
    let raw = headers.get(name)?.to_str().ok()?;
    pick(raw)?.trim().parse().ok()
}
