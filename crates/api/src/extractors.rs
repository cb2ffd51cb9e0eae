//! Request extractors.

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, request::Parts},
};
use webfuncs_core::network::{HeaderSource, cgi_name};

/// Request headers and peer address as CGI-style variables.
///
/// Header `X-Forwarded-For` becomes `HTTP_X_FORWARDED_FOR`; repeated headers
/// are joined with `", "`. The peer address, when the server was started with
/// connect info, becomes `REMOTE_ADDR`.
#[derive(Debug, Clone, Default)]
pub struct RequestVars(pub HashMap<String, String>);

impl RequestVars {
    /// Builds the variables from headers and an optional peer address.
    #[must_use]
    pub fn from_parts(headers: &HeaderMap, remote: Option<SocketAddr>) -> Self {
        let mut vars: HashMap<String, String> = HashMap::new();

        for (name, value) in headers {
            let Ok(value) = value.to_str() else {
                continue;
            };
            vars.entry(cgi_name(name.as_str()))
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(value);
                })
                .or_insert_with(|| value.to_string());
        }

        if let Some(addr) = remote {
            vars.insert("REMOTE_ADDR".to_string(), addr.ip().to_string());
        }

        Self(vars)
    }
}

impl HeaderSource for RequestVars {
    fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl<S> FromRequestParts<S> for RequestVars
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let remote = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);
        Ok(Self::from_parts(&parts.headers, remote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_headers_become_cgi_variables() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("198.51.100.2"));
        headers.append("via", HeaderValue::from_static("a"));
        headers.append("via", HeaderValue::from_static("b"));

        let vars = RequestVars::from_parts(&headers, Some(([10, 0, 0, 1], 4000).into()));

        assert_eq!(vars.get("HTTP_X_FORWARDED_FOR"), Some("198.51.100.2"));
        assert_eq!(vars.get("HTTP_VIA"), Some("a, b"));
        assert_eq!(vars.get("REMOTE_ADDR"), Some("10.0.0.1"));
    }

    #[test]
    fn test_no_peer_address() {
        let vars = RequestVars::from_parts(&HeaderMap::new(), None);
        assert!(vars.0.is_empty());
    }
}
