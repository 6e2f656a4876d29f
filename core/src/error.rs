//! Error taxonomy for the fetch helper.
//!
//! # Design
//! Every failure is a `FetchError` value; no path panics and nothing is
//! reported only through a callback. Transport failures keep their source
//! error boxed so any transport implementation can surface its own type
//! through the same variant.

use thiserror::Error;

use crate::http::Method;

/// Errors returned by `JsonClient` fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request url was absent or could not be parsed. Returned before
    /// any network call is attempted.
    #[error("request url is missing or invalid")]
    Url,

    /// No usable body: the response was empty, a POST was issued without a
    /// body, or the POST body could not be serialized.
    #[error("no usable request or response body")]
    Data,

    /// The transport reported a network-level failure.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The response was valid bytes but did not match the target shape.
    #[error("response did not match the expected shape: {0}")]
    Decode(String),

    /// The method is declared but has no implemented behavior.
    #[error("method {0} is not supported")]
    UnsupportedMethod(Method),

    /// The cancellation token fired before the fetch completed.
    #[error("fetch was cancelled")]
    Cancelled,
}

/// A network-level failure surfaced by a [`Transport`](crate::Transport).
///
/// Distinct from "the server answered with no data": transports return
/// `Err(TransportError)` only when the exchange itself failed.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct TransportError {
    #[from]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err)
    }
}
