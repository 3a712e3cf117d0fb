//! Orchestrates one transport call per load and delivers one result.
//!
//! # Design
//! `RemoteFeedLoader` holds only its fixed configuration: the feed URL, a
//! shared `HttpClient`, and a runtime handle. Each `load` spawns an independent task that owns a
//! clone of both, so overlapping loads never share state and may complete in
//! any order.
//!
//! Tasks run on the `Handle` the loader was built with, so `load` works from
//! any thread, inside a runtime or not.
//!
//! The loader also owns a liveness token (`Arc<()>`). Spawned tasks keep a
//! `Weak` to it and check it after the transport resolves; once the loader
//! is dropped the pending completion is discarded instead of invoked. The
//! transport request itself is left to finish.

use std::sync::{Arc, Weak};

use tokio::runtime::{Handle, TryCurrentError};
use tracing::debug;
use url::Url;

use crate::error::{LoadError, LoadResult};
use crate::http::{HttpClient, HttpClientResult};
use crate::mapper::FeedItemsMapper;

/// Callback receiving the result of one `load`.
pub type Completion = Box<dyn FnOnce(LoadResult) + Send + 'static>;

/// Something that can load the feed and report back once.
pub trait FeedLoader {
    fn load(&self, completion: Completion);
}

/// Loads the feed from a remote URL through an `HttpClient`.
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
    runtime: Handle,
    alive: Arc<()>,
}

impl RemoteFeedLoader {
    pub fn new(url: Url, client: Arc<dyn HttpClient>, runtime: Handle) -> Self {
        Self {
            url,
            client,
            runtime,
            alive: Arc::new(()),
        }
    }

    /// Build a loader bound to the runtime of the calling context.
    pub fn with_current_runtime(
        url: Url,
        client: Arc<dyn HttpClient>,
    ) -> Result<Self, TryCurrentError> {
        Ok(Self::new(url, client, Handle::try_current()?))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Run the load pipeline inline and return its result.
    pub async fn fetch(&self) -> LoadResult {
        debug!(url = %self.url, "loading feed");
        resolve(self.client.get(&self.url).await)
    }
}

impl FeedLoader for RemoteFeedLoader {
    /// Spawn the request on the loader's runtime.
    fn load(&self, completion: Completion) {
        let client = Arc::clone(&self.client);
        let url = self.url.clone();
        let alive: Weak<()> = Arc::downgrade(&self.alive);

        debug!(url = %url, "loading feed");
        self.runtime.spawn(async move {
            let outcome = client.get(&url).await;
            if alive.upgrade().is_none() {
                debug!(url = %url, "loader dropped before the response arrived, discarding result");
                return;
            }
            completion(resolve(outcome));
        });
    }
}

fn resolve(outcome: HttpClientResult) -> LoadResult {
    match outcome {
        Ok(response) => FeedItemsMapper::map(&response.body, response.status),
        Err(e) => {
            debug!(error = %e, "feed request failed");
            Err(LoadError::Connectivity)
        }
    }
}
