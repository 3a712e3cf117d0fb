//! Domain values produced by the feed loader.
//!
//! # Design
//! `FeedItem` is the only entity the core hands to callers. It is defined
//! independently from the wire DTOs in `mapper` so the JSON shape of the
//! remote feed can change without touching consumers; the mapper is the one
//! place that knows both.

use url::Url;
use uuid::Uuid;

/// A single item of the remote feed.
///
/// Constructed only by the mapper while decoding a response and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Url,
}
