//! Scripted [`Transport`] for tests.
//!
//! Responses are served in the order they were queued; every request is
//! recorded so tests can assert on paths, headers and bodies. Clones share the
//! same script and log.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::TransportError;
use crate::transport::{HttpRequest, HttpResponse, Transport};

#[derive(Debug, Default)]
struct Script {
    responses: VecDeque<Result<HttpResponse, TransportError>>,
    requests: Vec<HttpRequest>,
}

#[derive(Clone, Debug, Default)]
pub struct StubTransport {
    script: Rc<RefCell<Script>>,
}

impl StubTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and a JSON body.
    #[must_use]
    pub fn respond(self, status: u16, body: &serde_json::Value) -> Self {
        self.respond_raw(status, body.to_string())
    }

    /// Queue a response with `status` and a verbatim body.
    #[must_use]
    pub fn respond_raw(self, status: u16, body: impl Into<String>) -> Self {
        self.script
            .borrow_mut()
            .responses
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a transport-level failure.
    #[must_use]
    pub fn fail(self, message: &str) -> Self {
        self.script
            .borrow_mut()
            .responses
            .push_back(Err(TransportError::new(message)));
        self
    }

    /// Every request sent so far.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.script.borrow().requests.clone()
    }

    /// The most recent request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.script.borrow().requests.last().cloned()
    }
}

impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut script = self.script.borrow_mut();
        script.requests.push(request);
        script
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response")))
    }
}
