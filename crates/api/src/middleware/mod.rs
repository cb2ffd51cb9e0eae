//! Request middleware.

pub mod session;

pub use session::{CurrentSession, SESSION_COOKIE, session_middleware};
