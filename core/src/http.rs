//! Transport contract between the loader and whatever performs the GET.
//!
//! # Design
//! The loader never talks to the network directly. It depends on
//! `HttpClient`, a trait with a single async `get`, and receives the
//! response as plain data. Every status code is a successful transport
//! outcome; interpreting the status is the mapper's job. Only failures to
//! complete the exchange at all are reported as `TransportError`.
//!
//! Because `get` is an `async fn`, an implementation yields exactly one
//! outcome per call, whatever it does internally (redirects, connection
//! reuse). Implementations may resolve on any thread.

use async_trait::async_trait;
use url::Url;

use crate::error::TransportError;

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Response with the given status and body and no headers.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}

/// Outcome of one `HttpClient::get` call.
pub type HttpClientResult = Result<HttpResponse, TransportError>;

/// Performs one GET per call and resolves to exactly one outcome.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &Url) -> HttpClientResult;
}
