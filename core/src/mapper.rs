//! Maps raw feed responses into domain items.
//!
//! # Design
//! `FeedItemsMapper::map` is pure: status code and body in, `LoadResult`
//! out. The status is checked before the body is looked at, so a non-200
//! response is `InvalidData` even when it carries a valid payload. Decoding
//! is all-or-nothing: one bad item rejects the whole feed.
//!
//! The wire DTOs below are private. `description` and `location` decode as
//! `Option<String>`, so a missing key and an explicit `null` both become
//! `None` while `""` stays `Some("")`.

use serde::Deserialize;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::error::{LoadError, LoadResult};
use crate::types::FeedItem;

const OK_200: u16 = 200;

#[derive(Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

#[derive(Deserialize)]
struct RemoteFeedItem {
    id: Uuid,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    location: Option<String>,
    image: Url,
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(item: RemoteFeedItem) -> Self {
        FeedItem {
            id: item.id,
            description: item.description,
            location: item.location,
            image_url: item.image,
        }
    }
}

/// Stateless decoder for the `{"items": [...]}` feed document.
pub struct FeedItemsMapper;

impl FeedItemsMapper {
    pub fn map(body: &[u8], status: u16) -> LoadResult {
        if status != OK_200 {
            debug!(status, "rejecting feed response with non-200 status");
            return Err(LoadError::InvalidData);
        }

        let root: Root = serde_json::from_slice(body).map_err(|e| {
            debug!(error = %e, "rejecting undecodable feed payload");
            LoadError::InvalidData
        })?;

        Ok(root.items.into_iter().map(FeedItem::from).collect())
    }
}
