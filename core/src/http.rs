//! Plain-data description of an HTTP call.
//!
//! # Design
//! A [`Request`] describes what to fetch without touching the network; the
//! client interprets it against a transport. The url is deliberately an
//! `Option<String>`: callers often build urls from runtime data that may be
//! absent, and the client turns that into `FetchError::Url` before any I/O
//! instead of forcing every call site to unwrap.

use serde_json::{Map, Value};
use url::Url;

use crate::error::FetchError;

/// HTTP method for a request.
///
/// `Get` and `Post` are the only methods with defined behavior; `Put` and
/// `Delete` are declared for forward compatibility and currently resolve to
/// [`FetchError::UnsupportedMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// An HTTP request described as plain data.
///
/// Built by callers and interpreted by `JsonClient`. Query parameters are
/// merged into the url at fetch time; the JSON body is only meaningful for
/// `Post`.
#[derive(Debug, Clone)]
pub struct Request {
    pub url: Option<String>,
    pub method: Method,
    pub query: Vec<(String, String)>,
    pub body: Option<Map<String, Value>>,
}

impl Request {
    /// A GET request for `url`. Accepts `Option` directly so call sites can
    /// pass urls of uncertain provenance without unwrapping.
    pub fn get(url: impl Into<Option<String>>) -> Self {
        Self {
            url: url.into(),
            method: Method::Get,
            query: Vec::new(),
            body: None,
        }
    }

    /// A POST request for `url` carrying `body` as JSON.
    pub fn post(url: impl Into<Option<String>>, body: Map<String, Value>) -> Self {
        Self {
            url: url.into(),
            method: Method::Post,
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Resolve the final url: require presence, parse, and merge query
    /// parameters with proper percent-encoding.
    pub(crate) fn resolve_url(&self) -> Result<Url, FetchError> {
        let raw = self.url.as_deref().ok_or(FetchError::Url)?;
        let mut url = Url::parse(raw).map_err(|_| FetchError::Url)?;
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}
