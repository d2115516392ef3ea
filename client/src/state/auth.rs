//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and identity-aware components (navbar) to coordinate
//! login redirects and identity-dependent rendering. The Session Store is the
//! source of truth; this is the reactive mirror the view layer reads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::ENTRY_ROUTE;
use crate::state::session::Session;

/// Authentication state tracking the current session and loading status.
///
/// Provided as `RwSignal<AuthState>` context by the root `App`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// Settled state mirroring whatever the Session Store returned.
    pub fn from_session(session: Option<Session>) -> Self {
        Self { session, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Route guard lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    /// Deferred session sample has not run yet.
    #[default]
    Checking,
    Authorized,
    Unauthorized,
}

/// Decide the guard's next state from a Session Store presence sample.
///
/// Returns the redirect target when the visitor must leave the page.
pub fn guard_transition(present: bool) -> (GuardState, Option<&'static str>) {
    if present {
        (GuardState::Authorized, None)
    } else {
        (GuardState::Unauthorized, Some(ENTRY_ROUTE))
    }
}
