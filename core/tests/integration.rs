//! Loader tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `RemoteFeedLoader`
//! through `ReqwestHttpClient` over real HTTP. Covers every delivered result
//! kind: items, empty feed, non-200 status, malformed body, and a refused
//! connection.

use std::sync::Arc;

use feed_core::{
    FeedItem, FeedLoader, HttpClient, HttpClientConfig, LoadError, LoadResult, RemoteFeedLoader,
    ReqwestHttpClient,
};
use tokio::sync::oneshot;
use url::Url;

async fn start_server(items: Vec<mock_server::FeedItem>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener, items));
    format!("http://{addr}")
}

fn client() -> Arc<dyn HttpClient> {
    Arc::new(ReqwestHttpClient::new(HttpClientConfig::default()).unwrap())
}

fn loader(url: &str) -> RemoteFeedLoader {
    RemoteFeedLoader::with_current_runtime(Url::parse(url).unwrap(), client()).unwrap()
}

fn expected(items: &[mock_server::FeedItem]) -> Vec<FeedItem> {
    items
        .iter()
        .map(|i| FeedItem {
            id: i.id,
            description: i.description.clone(),
            location: i.location.clone(),
            image_url: Url::parse(&i.image).unwrap(),
        })
        .collect()
}

async fn load(sut: &RemoteFeedLoader) -> LoadResult {
    let (tx, rx) = oneshot::channel();
    sut.load(Box::new(move |result| {
        let _ = tx.send(result);
    }));
    rx.await.expect("completion was never invoked")
}

#[tokio::test]
async fn delivers_items_from_server() {
    let items = mock_server::sample_items();
    let base = start_server(items.clone()).await;
    let sut = loader(&format!("{base}/feed"));

    assert_eq!(load(&sut).await, Ok(expected(&items)));
}

#[tokio::test]
async fn fetch_delivers_items_from_server() {
    let items = mock_server::sample_items();
    let base = start_server(items.clone()).await;
    let sut = loader(&format!("{base}/feed"));

    assert_eq!(sut.fetch().await, Ok(expected(&items)));
}

#[tokio::test]
async fn delivers_empty_feed() {
    let base = start_server(Vec::new()).await;
    let sut = loader(&format!("{base}/feed"));

    assert_eq!(load(&sut).await, Ok(Vec::new()));
}

#[tokio::test]
async fn delivers_invalid_data_on_404_with_valid_body() {
    let base = start_server(mock_server::sample_items()).await;
    let sut = loader(&format!("{base}/status/404"));

    assert_eq!(load(&sut).await, Err(LoadError::InvalidData));
}

#[tokio::test]
async fn delivers_invalid_data_on_500() {
    let base = start_server(Vec::new()).await;
    let sut = loader(&format!("{base}/status/500"));

    assert_eq!(sut.fetch().await, Err(LoadError::InvalidData));
}

#[tokio::test]
async fn delivers_invalid_data_on_malformed_body() {
    let base = start_server(Vec::new()).await;
    let sut = loader(&format!("{base}/malformed"));

    assert_eq!(load(&sut).await, Err(LoadError::InvalidData));
}

#[tokio::test]
async fn delivers_connectivity_when_server_is_unreachable() {
    // Bind then drop to get a port nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let sut = loader(&format!("http://{addr}/feed"));
    assert_eq!(load(&sut).await, Err(LoadError::Connectivity));
}

#[tokio::test]
async fn loading_twice_delivers_twice() {
    let items = mock_server::sample_items();
    let base = start_server(items.clone()).await;
    let sut = loader(&format!("{base}/feed"));

    let (first, second) = tokio::join!(load(&sut), load(&sut));
    assert_eq!(first, Ok(expected(&items)));
    assert_eq!(second, Ok(expected(&items)));
}

#[tokio::test]
async fn client_passes_error_statuses_through_as_responses() {
    let base = start_server(Vec::new()).await;
    let url = Url::parse(&format!("{base}/status/503")).unwrap();

    let response = client().get(&url).await.unwrap();
    assert_eq!(response.status, 503);
    assert_eq!(response.body, br#"{"items":[]}"#);
    assert!(response
        .headers
        .iter()
        .any(|(k, v)| k == "content-type" && v == "application/json"));
}
