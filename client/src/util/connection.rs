//! GitHub connection-status check for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per dashboard mount. When the backend's OAuth callback has just
//! redirected back with `?auth=success&token_stored=true`, the account is known
//! to be linked and no request is made. Otherwise the status endpoint decides,
//! and any failure reads as "not connected".

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

use crate::net::api::ApiClient;
use crate::net::transport::Transport;

pub const AUTH_PARAM: &str = "auth";
pub const TOKEN_STORED_PARAM: &str = "token_stored";

/// Whether the query flags mark a just-completed OAuth callback.
pub fn oauth_callback_completed(auth: Option<&str>, token_stored: Option<&str>) -> bool {
    auth == Some("success") && token_stored == Some("true")
}

/// Resolve the linked-account state. Never fails: errors are logged and
/// reported as not connected.
pub async fn check_github_connection<T: Transport>(
    api: &ApiClient<T>,
    callback_completed: bool,
    token: Option<&str>,
) -> bool {
    if callback_completed {
        log::info!("OAuth callback completed; GitHub marked connected");
        return true;
    }
    let Some(token) = token else {
        log::warn!("no session token; GitHub connection treated as absent");
        return false;
    };
    match api.github_status(token).await {
        Ok(connected) => connected,
        Err(e) => {
            log::warn!("GitHub connection status check failed: {e}");
            false
        }
    }
}

/// Drop the callback flags from the address bar so a reload takes the
/// normal path. Browser only.
pub fn strip_callback_params(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if history
            .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path))
            .is_err()
        {
            log::warn!("could not rewrite URL after OAuth callback");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
