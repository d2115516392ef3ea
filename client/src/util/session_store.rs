//! Session persistence over a `KeyValueStorage` backend.
//!
//! DESIGN
//! ======
//! The whole session lives under one key as one JSON record, so a reader can
//! never observe a token without its profile (or the reverse). Anything that
//! fails to parse, or parses with an empty token/username, reads as absent.
//!
//! There is no expiry: a stale token is only discovered when the backend
//! rejects it.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::state::session::Session;
use crate::util::storage::{BrowserStorage, KeyValueStorage};

pub const SESSION_KEY: &str = "repo_analyzer_session";

/// Keys written by the earlier two-entry layout; removed on `clear`.
const LEGACY_KEYS: [&str; 2] = ["auth_token", "user_data"];

/// Read/write/clear access to the current session.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl SessionStore<BrowserStorage> {
    /// Store backed by `window.localStorage` (inert during SSR).
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The stored session, or `None` when missing or unreadable.
    pub fn read(&self) -> Option<Session> {
        let raw = self.storage.get(SESSION_KEY)?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.is_well_formed() => Some(session),
            Ok(_) => {
                log::warn!("stored session is missing token or username; treating as signed out");
                None
            }
            Err(e) => {
                log::warn!("stored session is not valid JSON ({e}); treating as signed out");
                None
            }
        }
    }

    /// Overwrite the stored session in a single write.
    pub fn write(&self, session: &Session) {
        match serde_json::to_string(session) {
            Ok(raw) => self.storage.set(SESSION_KEY, &raw),
            Err(e) => log::error!("failed to serialize session: {e}"),
        }
    }

    /// Remove the session. Clearing an empty store does nothing.
    pub fn clear(&self) {
        self.storage.remove(SESSION_KEY);
        for key in LEGACY_KEYS {
            self.storage.remove(key);
        }
    }

    pub fn is_present(&self) -> bool {
        self.read().is_some()
    }

    /// Bearer token of the current session.
    pub fn token(&self) -> Option<String> {
        self.read().map(|session| session.token)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
