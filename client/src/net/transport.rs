//! HTTP transport seam between the REST client and the browser.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every request fails with `TransportError::Unavailable`,
//! since the backend is only called from the browser.
//!
//! `ApiClient` only sees `ApiRequest`/`ApiReply`, so tests substitute a
//! recording transport instead of a network.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

/// HTTP method subset used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer: Option<String>,
    /// JSON body; sets `Content-Type: application/json`.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), bearer: None, body: None }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self { method: Method::Post, url: url.into(), bearer: None, body: None }
    }

    #[must_use]
    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }

    #[must_use]
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn authorization_header(&self) -> Option<String> {
        self.bearer.as_deref().map(|token| format!("Bearer {token}"))
    }
}

/// A completed response: any status, raw body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

impl ApiReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("not available on server")]
    Unavailable,
}

/// Sends requests to the backend.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError> {
        (**self).send(request).await
    }
}

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            if let Some(auth) = request.authorization_header() {
                builder = builder.header("Authorization", &auth);
            }
            let sent = match &request.body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| TransportError::InvalidRequest(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| TransportError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Ok(ApiReply { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}
