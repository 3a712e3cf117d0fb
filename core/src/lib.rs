//! Asynchronous feed loader core.
//!
//! # Overview
//! Fetches a remote `{"items": [...]}` feed through an abstract
//! `HttpClient` and turns the response into `FeedItem` values or one of two
//! domain errors, `Connectivity` and `InvalidData`.
//!
//! # Design
//! - `HttpClient` is the only I/O seam; the loader depends on the trait and
//!   tests substitute spies for it.
//! - `FeedItemsMapper` is pure: status and body in, `LoadResult` out.
//! - `RemoteFeedLoader` composes the two. Each `load` is independent and
//!   delivers exactly one result, unless the loader was dropped first.
//! - `ReqwestHttpClient` is the production transport; it lives beside the
//!   core but the loader never names it.

pub mod client;
pub mod error;
pub mod http;
pub mod loader;
pub mod mapper;
pub mod types;

pub use client::{HttpClientConfig, ReqwestHttpClient};
pub use error::{LoadError, LoadResult, TransportError};
pub use http::{HttpClient, HttpClientResult, HttpResponse};
pub use loader::{Completion, FeedLoader, RemoteFeedLoader};
pub use mapper::FeedItemsMapper;
pub use types::FeedItem;
