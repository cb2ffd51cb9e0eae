//! Client address detection from request metadata.

pub mod client_ip;

pub use client_ip::{FALLBACK_IP, HeaderSource, IP_HEADER_PRIORITY, cgi_name, detect_client_ip};
