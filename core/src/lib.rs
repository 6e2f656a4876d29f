//! Generic typed JSON-over-HTTP fetch helper.
//!
//! # Overview
//! `JsonClient` takes a [`Request`] description (url, method, query
//! parameters, optional JSON body) plus a target type, performs the HTTP
//! exchange through a [`Transport`], and decodes the response into the
//! target type. Every failure comes back as a [`FetchError`] value; nothing
//! escapes this crate as a panic.
//!
//! # Design
//! - One internal implementation, thin adapters on top: direct await
//!   (`fetch`), advisory failure hook (`fetch_with_on_fail`), cancellation
//!   (`fetch_with_cancel`), and a completion-callback form (`spawn_fetch`)
//!   for callers that prefer not to await inline.
//! - The network sits behind the `Transport` trait; `ReqwestTransport` is
//!   the default implementation, and tests swap in recording fakes.
//! - `JsonClient` carries no mutable state between calls, so any number of
//!   fetches may run concurrently without coordination.
//! - No retries and no per-request timeout: retry policy belongs to the
//!   caller, timeouts to the transport.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::JsonClient;
pub use error::{FetchError, TransportError};
pub use http::{Method, Request};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Todo, User};
