//! The persisted browser session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Client-held proof of authentication gating the protected pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential sent as `Authorization: Bearer <token>`.
    pub token: String,
    /// Login identifier; also the fallback display label.
    pub username: String,
    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, username: impl Into<String>, display_name: Option<String>) -> Self {
        Self { token: token.into(), username: username.into(), display_name }
    }

    /// A session is only usable with both a token and a username.
    pub fn is_well_formed(&self) -> bool {
        !self.token.trim().is_empty() && !self.username.trim().is_empty()
    }

    /// Human-readable name, falling back to the username.
    pub fn display_label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }

    /// Single-letter avatar fallback.
    pub fn initials(&self) -> String {
        self.display_label()
            .chars()
            .next()
            .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
    }
}
