//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Logout, stale-token expiry and the entry page's already-signed-in redirect
//! must behave identically wherever they are triggered.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::{DASHBOARD_ROUTE, ENTRY_ROUTE};
use crate::state::auth::AuthState;
use crate::util::session_store::SessionStore;
use crate::util::storage::KeyValueStorage;

/// Where the entry page should send a visitor, if anywhere.
pub fn entry_redirect(present: bool) -> Option<&'static str> {
    present.then_some(DASHBOARD_ROUTE)
}

/// Clear the stored session and return the signed-out state to publish.
pub fn sign_out<S: KeyValueStorage>(store: &SessionStore<S>) -> AuthState {
    store.clear();
    AuthState::from_session(None)
}

/// Drop the session and send the visitor back to the entry page.
///
/// Used for explicit logout and when the backend rejects the stored token.
pub fn expire_session<S, F>(store: &SessionStore<S>, auth: RwSignal<AuthState>, navigate: F)
where
    S: KeyValueStorage,
    F: Fn(&str, NavigateOptions),
{
    auth.set(sign_out(store));
    navigate(ENTRY_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
}
