//! Pure session state machine.
//!
//! DESIGN
//! ======
//! No I/O, no storage, no UI — just the transition function. The store
//! layers side effects (persistence, observers, navigation) on top, so
//! every transition here is testable without a network or a renderer.
//!
//! Invariants: a session is logged in iff it carries a user; an anonymous
//! session has no role.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

use super::policy::Role;

/// Identity record for the authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

/// The client's belief about the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Before the first session check resolves.
    #[default]
    Unknown,
    /// Confirmed logged out.
    Anonymous,
    /// Confirmed logged in.
    Authenticated {
        user: User,
        /// Opaque bearer token, when the backend issues one.
        token: Option<String>,
    },
}

impl SessionState {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            Self::Unknown | Self::Anonymous => None,
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| user.role)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => token.as_deref(),
            Self::Unknown | Self::Anonymous => None,
        }
    }
}

/// Events that drive session transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A session check or login confirmed an identity.
    Confirmed { user: User, token: Option<String> },
    /// A session check reported logged-out, or failed outright.
    Rejected,
    /// User-initiated logout.
    LoggedOut,
}

/// Apply one event to a state, yielding the next state.
///
/// Total over all state/event pairs; a session check never leaves the
/// machine in `Unknown` once it resolves.
#[must_use]
pub fn apply(state: &SessionState, event: SessionEvent) -> SessionState {
    let _ = state;
    match event {
        SessionEvent::Confirmed { user, token } => SessionState::Authenticated { user, token },
        SessionEvent::Rejected | SessionEvent::LoggedOut => SessionState::Anonymous,
    }
}
