//! Client configuration: backend base URL, route paths, and UI timings.
//!
//! The backend base URL is fixed at build time (`ANALYZER_API_BASE`) because
//! the WASM bundle has no process environment to read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080";
pub const API_PREFIX: &str = "/api/v1.0.0";

/// Public login/register entry page.
pub const ENTRY_ROUTE: &str = "/";
/// Authenticated landing page. The backend's OAuth callback redirects here.
pub const DASHBOARD_ROUTE: &str = "/hero";
pub const HISTORY_ROUTE: &str = "/history";

/// Deferral before the route guard samples the session store.
pub const GUARD_CHECK_DELAY: Duration = Duration::from_millis(100);
/// Pause on the success message before leaving the entry page.
pub const AUTH_REDIRECT_DELAY: Duration = Duration::from_millis(1000);
pub const NOTICE_DURATION: Duration = Duration::from_millis(4000);

/// Backend base URL with trailing slashes removed.
pub fn api_base() -> String {
    normalize_api_base(option_env!("ANALYZER_API_BASE"))
}

fn normalize_api_base(raw: Option<&str>) -> String {
    let base = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_API_BASE);
    base.trim_end_matches('/').to_owned()
}

/// Client route for a single analysis record.
pub fn analysis_route(id: i64) -> String {
    format!("/analyzer/{id}")
}
