//! Generic typed fetch over an abstract transport.
//!
//! # Design
//! `JsonClient` holds only a shared transport handle and carries no mutable
//! state between calls, so callers may issue any number of fetches
//! concurrently. One internal code path (`fetch`) implements the semantics;
//! the failure-hook, cancellation, and completion-callback forms are thin
//! adapters over it rather than divergent copies.

use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::http::{Method, Request};
use crate::transport::{ReqwestTransport, Transport};

/// Typed JSON-over-HTTP client.
///
/// Interprets a [`Request`] against a [`Transport`] and decodes the response
/// into the caller-chosen target type. Failures are always returned as
/// [`FetchError`] values.
#[derive(Clone)]
pub struct JsonClient {
    transport: Arc<dyn Transport>,
}

impl JsonClient {
    /// A client on the default reqwest transport.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::default()))
    }

    /// A client on a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Perform the request and decode the response into `T`.
    ///
    /// A missing or unparseable url fails with [`FetchError::Url`] before
    /// the transport is touched. POST requires a body and sends it as JSON
    /// with a `content-type: application/json` header. PUT and DELETE are
    /// declared but unimplemented and fail with
    /// [`FetchError::UnsupportedMethod`].
    pub async fn fetch<T: DeserializeOwned>(&self, req: Request) -> Result<T, FetchError> {
        let url = req.resolve_url()?;
        debug!(%url, method = %req.method, "fetch");

        let bytes = match req.method {
            Method::Get => self.transport.get(url.as_str()).await?,
            Method::Post => {
                let body = req.body.as_ref().ok_or(FetchError::Data)?;
                let payload = serde_json::to_vec(body).map_err(|_| FetchError::Data)?;
                let headers = [(
                    "content-type".to_string(),
                    "application/json".to_string(),
                )];
                self.transport
                    .post(url.as_str(), &headers, Bytes::from(payload))
                    .await?
            }
            method @ (Method::Put | Method::Delete) => {
                return Err(FetchError::UnsupportedMethod(method));
            }
        };

        if bytes.is_empty() {
            warn!(%url, "response carried no body");
            return Err(FetchError::Data);
        }
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Like [`fetch`](Self::fetch), additionally invoking `on_fail` exactly
    /// once if the operation fails.
    ///
    /// The hook is advisory (telemetry, UI toast); the returned result is
    /// always the authoritative outcome and must still be inspected.
    pub async fn fetch_with_on_fail<T, F>(&self, req: Request, on_fail: F) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        F: FnOnce(&FetchError),
    {
        let result = self.fetch(req).await;
        if let Err(err) = &result {
            on_fail(err);
        }
        result
    }

    /// Like [`fetch`](Self::fetch), but resolves to [`FetchError::Cancelled`]
    /// if `cancel` fires before the fetch completes.
    ///
    /// The select is biased toward the token so an already-cancelled token
    /// never reaches the network.
    pub async fn fetch_with_cancel<T: DeserializeOwned>(
        &self,
        req: Request,
        cancel: &CancellationToken,
    ) -> Result<T, FetchError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FetchError::Cancelled),
            result = self.fetch(req) => result,
        }
    }

    /// Completion-callback form for callers that prefer not to await inline.
    ///
    /// Runs the fetch on a spawned task and invokes `completion` exactly
    /// once with the outcome. Marshalling the callback onto a particular
    /// thread is the caller's concern.
    pub fn spawn_fetch<T, C>(&self, req: Request, completion: C) -> JoinHandle<()>
    where
        T: DeserializeOwned + Send + 'static,
        C: FnOnce(Result<T, FetchError>) + Send + 'static,
    {
        let client = self.clone();
        tokio::spawn(async move {
            completion(client.fetch(req).await);
        })
    }
}

impl Default for JsonClient {
    fn default() -> Self {
        Self::new()
    }
}
