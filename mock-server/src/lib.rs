use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub image: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Feed {
    pub items: Vec<FeedItem>,
}

pub type Db = Arc<Feed>;

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(items: Vec<FeedItem>) -> Router {
    let db: Db = Arc::new(Feed { items });
    Router::new()
        .route("/feed", get(get_feed))
        .route("/status/{code}", get(feed_with_status))
        .route("/malformed", get(malformed))
        .with_state(db)
}

/// A couple of items so a bare `mock-server` run has something to serve.
pub fn sample_items() -> Vec<FeedItem> {
    vec![
        FeedItem {
            id: Uuid::new_v4(),
            description: None,
            location: None,
            image: "http://a-url.com".to_string(),
        },
        FeedItem {
            id: Uuid::new_v4(),
            description: Some("a description".to_string()),
            location: Some("a location".to_string()),
            image: "http://another-url.com".to_string(),
        },
    ]
}

pub async fn run(listener: TcpListener, items: Vec<FeedItem>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(items)).await
}

async fn get_feed(State(db): State<Db>) -> Json<Feed> {
    Json(db.as_ref().clone())
}

async fn feed_with_status(State(db): State<Db>, Path(code): Path<u16>) -> Response {
    let Ok(status) = StatusCode::from_u16(code) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    (status, Json(db.as_ref().clone())).into_response()
}

async fn malformed() -> &'static str {
    "Invalid json"
}
