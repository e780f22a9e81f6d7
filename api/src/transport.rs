//! Transport seam between [`crate::ApiClient`] and a concrete HTTP stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser plugs in `gloo-net`, the CLI plugs in `reqwest`, and tests plug
//! in `StubTransport`. Implementations only move bytes: status handling and
//! decoding stay in the client so every host gets identical error semantics.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::future::Future;

use serde::Serialize;

use crate::error::{ApiError, TransportError};

/// HTTP verbs used by the storefront backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A single outbound request, relative to the transport's base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Path below the API base, starting with `/` (e.g. `/product/1`).
    pub path: String,
    /// Query pairs, already stringified. Transports handle the encoding.
    pub query: Vec<(String, String)>,
    /// Token for the `Authorization: Bearer` header.
    pub bearer: Option<String>,
    /// JSON request body.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            bearer: None,
            body: None,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token.filter(|t| !t.is_empty());
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be represented as JSON.
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Path plus encoded-for-display query, used in log lines.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.query.is_empty() {
            return format!("{} {}", self.method.as_str(), self.path);
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{} {}?{query}", self.method.as_str(), self.path)
    }
}

/// Raw response: status code and body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can carry an [`HttpRequest`] to the backend.
///
/// Futures are not required to be `Send`: the browser transport runs on the
/// single-threaded WASM executor.
pub trait Transport {
    /// Send `request` and return the raw response.
    ///
    /// Any non-2xx status is still `Ok`; only failures to complete the
    /// exchange are `Err`.
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, TransportError>> {
        (**self).send(request)
    }
}

/// Join a base URL and an API path without doubling or dropping the slash.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
