//! Browser HTTP transport for the storefront API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every send fails with a transport error, since these
//! endpoints are only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Only failures to complete the exchange (CORS, DNS, offline, unreadable
//! body) are reported here. Status codes pass through untouched and are
//! classified by `medicare_api::ApiClient`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use medicare_api::transport::join_url;
use medicare_api::{ApiClient, HttpRequest, HttpResponse, Transport, TransportError};

use crate::config;
use crate::util::storage::LocalStorage;

/// API client as used by pages: `gloo-net` over `localStorage`.
pub type WebClient = ApiClient<GlooTransport, LocalStorage>;

/// Build a client against the configured base URL.
///
/// Cheap enough to call per interaction; it holds no connection state.
pub fn web_client() -> WebClient {
    ApiClient::new(GlooTransport::new(config::api_base_url()), LocalStorage)
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// `Transport` backed by the browser's `fetch` through `gloo-net`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn url_for(&self, request: &HttpRequest) -> String {
        join_url(&self.base_url, &request.path)
    }
}

impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;
            use medicare_api::Method;

            let url = self.url_for(&request);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            if !request.query.is_empty() {
                builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let prepared = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::new(e.to_string()))?;

            let resp = prepared
                .send()
                .await
                .map_err(|e| TransportError::new(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| TransportError::new(e.to_string()))?;
            Ok(HttpResponse::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(TransportError::new(format!(
                "{} unavailable outside the browser",
                self.url_for(&request)
            )))
        }
    }
}
