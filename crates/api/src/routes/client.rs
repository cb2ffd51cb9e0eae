//! Client metadata routes: detected IP and session.

use axum::{Json, Router, routing::get};
use serde::Serialize;
use webfuncs_core::network::detect_client_ip;
use webfuncs_core::session::SessionId;

use crate::{AppState, extractors::RequestVars, middleware::CurrentSession};

/// Creates routes that need no session.
pub fn routes() -> Router<AppState> {
    Router::new().route("/ip", get(client_ip))
}

/// Creates routes that expect the session middleware.
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/session", get(current_session))
}

/// Detected IP response.
#[derive(Debug, Serialize)]
pub struct IpResponse {
    /// Best-effort client address; `None` when nothing identifies the client.
    pub ip: Option<String>,
}

/// GET `/ip` - Best-effort client IP. Spoofable; do not use for access control.
async fn client_ip(vars: RequestVars) -> Json<IpResponse> {
    Json(IpResponse {
        ip: detect_client_ip(&vars),
    })
}

/// Session response.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Active session id.
    pub session_id: SessionId,
    /// Whether this request started it.
    pub started: bool,
}

/// GET `/session` - The session bootstrapped for this request.
async fn current_session(session: CurrentSession) -> Json<SessionResponse> {
    Json(SessionResponse {
        session_id: session.id,
        started: session.started,
    })
}
