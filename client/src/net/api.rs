//! REST client for the analysis backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and register are the only calls that write the session store; every
//! other endpoint takes the bearer token explicitly. Requests go through a
//! `Transport`, which is `BrowserTransport` in the app.
//!
//! ERROR HANDLING
//! ==============
//! Auth and analysis-trigger calls settle into `AuthOutcome`/`AnalyzeOutcome`
//! carrying user-facing text; transport failures and rejected requests take
//! the same failure branch. Read endpoints return `ApiError` so pages can tell
//! an expired token (`Unauthorized`) apart from other failures.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::transport::{ApiReply, ApiRequest, BrowserTransport, Transport, TransportError};
use super::types::{AnalysisRecord, AnalyzeResponse, AuthResponse, LoginRequest, RegisterRequest};
use crate::config::{self, API_PREFIX};
use crate::state::session::Session;
use crate::util::session_store::SessionStore;
use crate::util::storage::KeyValueStorage;

const LOGIN_OK: &str = "Login successful";
const LOGIN_FAILED: &str = "Login failed";
const LOGIN_UNREACHABLE: &str = "Unauthorized. Please try again.";
const REGISTER_OK: &str = "Registration successful";
const REGISTER_FAILED: &str = "Registration failed";
const NETWORK_ERROR: &str = "Network error. Please try again.";
const ANALYZE_OK: &str = "Repository analysis completed successfully!";
const ANALYZE_FAILED: &str = "Failed to analyze repository.";

/// Failure of a read endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The backend rejected the bearer token.
    #[error("session rejected by server (status {status})")]
    Unauthorized { status: u16 },
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Result of a login or register attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    /// Set only on success; already written to the session store.
    pub session: Option<Session>,
    pub message: String,
}

impl AuthOutcome {
    fn success(session: Session, message: String) -> Self {
        Self { success: true, session: Some(session), message }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self { success: false, session: None, message: message.into() }
    }
}

/// Result of triggering a repository analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzeOutcome {
    pub success: bool,
    pub message: String,
}

/// Client for the `/api/v1.0.0` endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

impl ApiClient<BrowserTransport> {
    /// Browser client pointed at the configured backend.
    pub fn browser() -> Self {
        Self::new(config::api_base(), BrowserTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { transport, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    /// `POST /auth/login`; writes the session on success.
    pub async fn login<S: KeyValueStorage>(
        &self,
        store: &SessionStore<S>,
        username: &str,
        password: &str,
    ) -> AuthOutcome {
        let body = LoginRequest { username, password };
        let request = ApiRequest::post(self.endpoint("/auth/login")).json(to_json(&body));
        let outcome = match self.transport.send(request).await {
            Ok(reply) => settle_auth(store, &reply, username, || username.to_owned(), LOGIN_OK, LOGIN_FAILED),
            Err(e) => {
                log::warn!("login request did not complete: {e}");
                AuthOutcome::failure(LOGIN_UNREACHABLE)
            }
        };
        log::info!("login for {username}: success={}", outcome.success);
        outcome
    }

    /// `POST /auth/register`; writes the session on success.
    pub async fn register<S: KeyValueStorage>(
        &self,
        store: &SessionStore<S>,
        first_name: &str,
        last_name: &str,
        username: &str,
        password: &str,
    ) -> AuthOutcome {
        let body = RegisterRequest { first_name, last_name, username, password };
        let request = ApiRequest::post(self.endpoint("/auth/register")).json(to_json(&body));
        let outcome = match self.transport.send(request).await {
            Ok(reply) => settle_auth(
                store,
                &reply,
                username,
                || format!("{first_name} {last_name}"),
                REGISTER_OK,
                REGISTER_FAILED,
            ),
            Err(e) => {
                log::warn!("register request did not complete: {e}");
                AuthOutcome::failure(NETWORK_ERROR)
            }
        };
        log::info!("register for {username}: success={}", outcome.success);
        outcome
    }

    /// `GET /auth/github/status`: whether a GitHub account is linked.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a body
    /// that is not a JSON boolean.
    pub async fn github_status(&self, token: &str) -> Result<bool, ApiError> {
        let request = ApiRequest::get(self.endpoint("/auth/github/status")).bearer(token);
        self.fetch_json(request).await
    }

    /// `GET /auth/github/oauth`: the provider URL to send the browser to.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or an empty body.
    pub async fn github_oauth_url(&self, token: &str) -> Result<String, ApiError> {
        let request = ApiRequest::get(self.endpoint("/auth/github/oauth")).bearer(token);
        let reply = self.send_checked(request).await?;
        let url = reply.body.trim();
        if url.is_empty() {
            return Err(ApiError::Status { status: reply.status, message: "empty OAuth URL".to_owned() });
        }
        Ok(url.to_owned())
    }

    /// `POST /analyze/repo?repoUrl=...`.
    pub async fn trigger_analysis(&self, token: &str, repo_url: &str) -> AnalyzeOutcome {
        let url = format!("{}?repoUrl={}", self.endpoint("/analyze/repo"), urlencoding::encode(repo_url));
        let request = ApiRequest::post(url).bearer(token);
        let outcome = match self.transport.send(request).await {
            Ok(reply) => settle_analyze(&reply),
            Err(e) => {
                log::warn!("analysis request did not complete: {e}");
                AnalyzeOutcome { success: false, message: NETWORK_ERROR.to_owned() }
            }
        };
        log::info!("analysis trigger for {repo_url}: success={}", outcome.success);
        outcome
    }

    /// `GET /analyze/project/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a malformed record.
    pub async fn fetch_analysis(&self, token: &str, id: i64) -> Result<AnalysisRecord, ApiError> {
        let request = ApiRequest::get(self.endpoint(&format!("/analyze/project/{id}"))).bearer(token);
        self.fetch_json(request).await
    }

    /// `GET /analyze/allProjects`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a body
    /// that is not a JSON array. Individual records that fail to decode are
    /// logged and skipped.
    pub async fn list_analyses(&self, token: &str) -> Result<Vec<AnalysisRecord>, ApiError> {
        let request = ApiRequest::get(self.endpoint("/analyze/allProjects")).bearer(token);
        let raw: Vec<serde_json::Value> = self.fetch_json(request).await?;
        let total = raw.len();
        let records: Vec<AnalysisRecord> = raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<AnalysisRecord>(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("skipping malformed analysis record: {e}");
                    None
                }
            })
            .collect();
        if records.len() < total {
            log::warn!("decoded {} of {total} analysis records", records.len());
        }
        Ok(records)
    }

    async fn fetch_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let reply = self.send_checked(request).await?;
        Ok(serde_json::from_str(&reply.body)?)
    }

    async fn send_checked(&self, request: ApiRequest) -> Result<ApiReply, ApiError> {
        let authenticated = request.bearer.is_some();
        let reply = self.transport.send(request).await?;
        if reply.is_success() {
            return Ok(reply);
        }
        if authenticated && matches!(reply.status, 401 | 403) {
            return Err(ApiError::Unauthorized { status: reply.status });
        }
        Err(ApiError::Status { status: reply.status, message: error_message(&reply.body) })
    }
}

fn to_json<B: serde::Serialize>(body: &B) -> serde_json::Value {
    serde_json::to_value(body).unwrap_or(serde_json::Value::Null)
}

/// Turn a login/register reply into an outcome, writing the session on success.
fn settle_auth<S: KeyValueStorage>(
    store: &SessionStore<S>,
    reply: &ApiReply,
    username: &str,
    fallback_name: impl FnOnce() -> String,
    ok_message: &str,
    failed_message: &str,
) -> AuthOutcome {
    let body: AuthResponse = serde_json::from_str(&reply.body).unwrap_or_default();
    let message = body.message.filter(|m| !m.trim().is_empty());

    if !reply.is_success() {
        return AuthOutcome::failure(message.unwrap_or_else(|| failed_message.to_owned()));
    }

    let Some(token) = body.token.filter(|t| !t.trim().is_empty()) else {
        log::warn!("auth reply {} carried no token", reply.status);
        return AuthOutcome::failure(failed_message);
    };
    let display_name = body
        .display_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(fallback_name);
    let session = Session::new(token, username, Some(display_name));
    store.write(&session);
    AuthOutcome::success(session, message.unwrap_or_else(|| ok_message.to_owned()))
}

fn settle_analyze(reply: &ApiReply) -> AnalyzeOutcome {
    let body: AnalyzeResponse = serde_json::from_str(&reply.body).unwrap_or_default();
    let success = body.status.as_deref() == Some("success");
    let fallback = if success { ANALYZE_OK } else { ANALYZE_FAILED };
    let message = body
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned());
    AnalyzeOutcome { success, message }
}

/// `message` field of a JSON error body, else the trimmed body text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| body.trim().to_owned())
}
