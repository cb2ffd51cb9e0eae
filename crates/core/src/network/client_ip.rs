//! Best-effort client IP detection.
//!
//! The variables checked here are all client-controlled except `REMOTE_ADDR`.
//! The result is fine for logging and display; it is NOT a security control.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::net::Ipv4Addr;

use tracing::warn;

/// Returned when the first matching variable does not hold a valid IPv4 address.
pub const FALLBACK_IP: &str = "127.0.0.1";

/// CGI-style variable names checked in order; the first one present wins.
pub const IP_HEADER_PRIORITY: &[&str] = &[
    "HTTP_CLIENT_IP",
    "HTTP_PRAGMA",
    "HTTP_XONNECTION",
    "HTTP_CACHE_INFO",
    "HTTP_XPROXY",
    "HTTP_PROXY",
    "HTTP_PROXY_CONNECTION",
    "HTTP_VIA",
    "HTTP_X_COMING_FROM",
    "HTTP_COMING_FROM",
    "HTTP_X_FORWARDED_FOR",
    "HTTP_X_FORWARDED",
    "HTTP_X_CLUSTER_CLIENT_IP",
    "HTTP_FORWARDED_FOR",
    "HTTP_FORWARDED",
    "ZHTTP_CACHE_CONTROL",
    "REMOTE_ADDR",
];

/// Read access to request variables keyed by CGI-style name
/// (`HTTP_X_FORWARDED_FOR`, `REMOTE_ADDR`, ...).
pub trait HeaderSource {
    /// Returns the value of `name`, if present.
    fn get(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> HeaderSource for HashMap<String, String, S> {
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(String::as_str)
    }
}

impl HeaderSource for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        BTreeMap::get(self, name).map(String::as_str)
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for &T {
    fn get(&self, name: &str) -> Option<&str> {
        (**self).get(name)
    }
}

/// Converts an HTTP header name to its CGI variable name,
/// e.g. `X-Forwarded-For` to `HTTP_X_FORWARDED_FOR`.
#[must_use]
pub fn cgi_name(header: &str) -> String {
    let mut name = String::with_capacity(header.len() + 5);
    name.push_str("HTTP_");
    name.extend(header.chars().map(|c| match c {
        '-' => '_',
        c => c.to_ascii_uppercase(),
    }));
    name
}

/// Detects the client IP from `source`.
///
/// Only the first variable present in [`IP_HEADER_PRIORITY`] is consulted,
/// and only its first comma-separated value. That value is returned when it
/// is a valid IPv4 address, otherwise [`FALLBACK_IP`]. Returns `None` when no
/// variable is present at all.
pub fn detect_client_ip(source: &impl HeaderSource) -> Option<String> {
    let (name, value) = IP_HEADER_PRIORITY
        .iter()
        .find_map(|name| source.get(name).map(|value| (*name, value)))?;

    let candidate = value.split(',').next().unwrap_or_default().trim();
    if candidate.parse::<Ipv4Addr>().is_ok() {
        Some(candidate.to_string())
    } else {
        warn!(variable = name, value = candidate, "Rejected client IP candidate");
        Some(FALLBACK_IP.to_string())
    }
}
