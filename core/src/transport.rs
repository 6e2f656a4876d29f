//! Network seam: the `Transport` trait and its reqwest implementation.
//!
//! # Design
//! The client never talks to the network directly; it hands fully resolved
//! urls and byte payloads to a `Transport`. This keeps the core testable
//! with recording fakes and lets callers bring a different HTTP stack.
//! Connection pooling, TLS, and redirects all live inside the transport.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::error::TransportError;

/// Minimal async HTTP transport.
///
/// Transport-level failures (connect, DNS, timeout) are `Err`; a server
/// response with an empty body is `Ok` with empty `Bytes` and classified by
/// the client, not here.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET request and return the response body bytes.
    async fn get(&self, url: &str) -> Result<Bytes, TransportError>;

    /// Perform a POST request with the given headers and payload, returning
    /// the response body bytes.
    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: Bytes,
    ) -> Result<Bytes, TransportError>;
}

/// Default transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<Bytes, TransportError> {
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        Ok(response.bytes().await?)
    }

    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: Bytes,
    ) -> Result<Bytes, TransportError> {
        debug!(%url, bytes = body.len(), "POST");
        let mut request = self.client.post(url).body(body);
        for (name, value) in headers {
            request = request.header(name, value);
        }
        let response = request.send().await?;
        Ok(response.bytes().await?)
    }
}
