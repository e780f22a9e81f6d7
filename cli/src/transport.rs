//! `reqwest` implementation of the API transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use medicare_api::transport::join_url;
use medicare_api::{HttpRequest, HttpResponse, Method, Transport, TransportError};

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("medicare-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Build the `reqwest` request for `request` without sending it.
    pub fn build(&self, request: &HttpRequest) -> Result<reqwest::Request, reqwest::Error> {
        let url = join_url(&self.base_url, &request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder.build()
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let prepared = self.build(&request).map_err(|e| TransportError::new(e.to_string()))?;
        tracing::debug!(method = %prepared.method(), url = %prepared.url(), "sending request");
        let response = self
            .client
            .execute(prepared)
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| TransportError::new(e.to_string()))?;
        tracing::debug!(status, bytes = body.len(), "received response");
        Ok(HttpResponse::new(status, body))
    }
}
