//! Session middleware for routes that need a session.

use axum::{
    extract::{FromRequestParts, Request},
    http::{
        HeaderMap, HeaderValue,
        header::{COOKIE, SET_COOKIE},
        request::Parts,
    },
    middleware::Next,
    response::Response,
};
use tracing::debug;
use webfuncs_core::session::{BootstrapOutcome, ExecutionContext, Session, SessionId};
use webfuncs_shared::AppError;

use crate::error::ApiError;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "webfuncs_session";

/// Reads the session id from the `Cookie` headers, ignoring malformed values.
fn session_from_cookies(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| value.parse().ok())
}

/// Session middleware that bootstraps a session for every request.
///
/// This middleware:
/// 1. Resumes the session named by the cookie, if any
/// 2. Otherwise starts a new one
/// 3. Stores it in request extensions for handlers to access
/// 4. Sets the cookie on the response when a session was started
pub async fn session_middleware(mut request: Request, next: Next) -> Response {
    let mut session =
        session_from_cookies(request.headers()).map_or_else(Session::new, Session::resume);

    let outcome = session.bootstrap(ExecutionContext::Web);
    let Some(id) = outcome.session_id() else {
        return next.run(request).await;
    };

    let started = matches!(outcome, BootstrapOutcome::Started(_));
    request
        .extensions_mut()
        .insert(CurrentSession { id, started });

    let mut response = next.run(request).await;

    if started {
        let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => debug!(error = %e, "Failed to build session cookie"),
        }
    }

    response
}

/// Extractor for the session bootstrapped by [`session_middleware`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentSession {
    /// Active session id.
    pub id: SessionId,
    /// Whether this request started the session.
    pub started: bool,
}

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentSession>()
            .copied()
            .ok_or_else(|| {
                ApiError(AppError::Internal(
                    "Session middleware is not installed".to_string(),
                ))
            })
    }
}
