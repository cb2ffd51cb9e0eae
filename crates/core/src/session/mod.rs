//! Session bootstrap.
//!
//! A session moves from `Inactive` to `Active` exactly once; bootstrapping an
//! active session is a no-op, and nothing happens at all outside a web
//! context.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Unique identifier for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Creates a new random ID using UUID v7 (time-ordered).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Where the code is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Command line or other non-interactive run; sessions never start.
    Cli,
    /// Serving a request.
    Web,
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No session yet.
    #[default]
    Inactive,
    /// Session started with the given id.
    Active(SessionId),
}

/// What a bootstrap call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Non-interactive context; nothing was done.
    Skipped,
    /// A session was already active.
    AlreadyActive(SessionId),
    /// A new session was started.
    Started(SessionId),
}

impl BootstrapOutcome {
    /// Returns the active session id, if any.
    #[must_use]
    pub const fn session_id(self) -> Option<SessionId> {
        match self {
            Self::Skipped => None,
            Self::AlreadyActive(id) | Self::Started(id) => Some(id),
        }
    }
}

/// A single session with an explicit `Inactive -> Active` transition.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// Creates an inactive session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds an already-active session, e.g. from a cookie.
    #[must_use]
    pub const fn resume(id: SessionId) -> Self {
        Self {
            state: SessionState::Active(id),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the session id when active.
    #[must_use]
    pub const fn id(&self) -> Option<SessionId> {
        match self.state {
            SessionState::Active(id) => Some(id),
            SessionState::Inactive => None,
        }
    }

    /// Returns true once the session has started.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    /// Starts the session unless it is already active or `context` is CLI.
    pub fn bootstrap(&mut self, context: ExecutionContext) -> BootstrapOutcome {
        if context == ExecutionContext::Cli {
            return BootstrapOutcome::Skipped;
        }

        match self.state {
            SessionState::Active(id) => BootstrapOutcome::AlreadyActive(id),
            SessionState::Inactive => {
                let id = SessionId::new();
                self.state = SessionState::Active(id);
                info!(session_id = %id, "Session started");
                BootstrapOutcome::Started(id)
            }
        }
    }
}

static PROCESS_SESSION: OnceCell<SessionId> = OnceCell::new();

/// Starts the process-wide session at most once.
///
/// Later calls report the session started by the first one.
pub fn bootstrap_session(context: ExecutionContext) -> BootstrapOutcome {
    if context == ExecutionContext::Cli {
        return BootstrapOutcome::Skipped;
    }

    let mut started = false;
    let id = *PROCESS_SESSION.get_or_init(|| {
        started = true;
        SessionId::new()
    });

    if started {
        info!(session_id = %id, "Process session started");
        BootstrapOutcome::Started(id)
    } else {
        BootstrapOutcome::AlreadyActive(id)
    }
}

/// Returns the process-wide session id, if one was started.
pub fn process_session() -> Option<SessionId> {
    PROCESS_SESSION.get().copied()
}
