//! Error types for the feed loader.
//!
//! # Design
//! Callers see exactly two failure kinds. `Connectivity` covers every way the
//! HTTP exchange can fail to complete; `InvalidData` covers every way a
//! completed exchange can be unusable. The transport's own error is kept in
//! `TransportError`, which only crosses the `HttpClient` boundary and is
//! discarded by the loader.

use thiserror::Error;

use crate::types::FeedItem;

/// Outcome of one feed load, delivered exactly once per `load` call.
pub type LoadResult = Result<Vec<FeedItem>, LoadError>;

/// Domain errors delivered by `FeedLoader::load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The transport could not complete the exchange (DNS, connect, TLS,
    /// timeout, truncated body).
    #[error("could not reach the feed server")]
    Connectivity,

    /// The exchange completed but the response was not a 200 carrying a
    /// well-formed items payload.
    #[error("the feed server returned invalid data")]
    InvalidData,
}

/// Opaque failure reported by an `HttpClient` implementation.
#[derive(Debug, Error)]
#[error("transport failed: {0}")]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err)
    }
}
