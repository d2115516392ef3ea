//! Recording transport for tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::transport::{ApiReply, ApiRequest, Transport, TransportError};

/// Replays canned replies in order and records every request it is sent.
#[derive(Debug, Default)]
pub struct StubTransport {
    replies: RefCell<VecDeque<Result<ApiReply, TransportError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying(status: u16, body: impl Into<String>) -> Self {
        let stub = Self::new();
        stub.push_reply(status, body);
        stub
    }

    pub fn failing(error: TransportError) -> Self {
        let stub = Self::new();
        stub.replies.borrow_mut().push_back(Err(error));
        stub
    }

    pub fn push_reply(&self, status: u16, body: impl Into<String>) {
        self.replies.borrow_mut().push_back(Ok(ApiReply::new(status, body)));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for StubTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, TransportError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no stubbed reply".to_owned())))
    }
}
