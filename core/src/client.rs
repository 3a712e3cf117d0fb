//! `HttpClient` implementation backed by reqwest.
//!
//! # Design
//! The client reports every HTTP status as a successful `HttpResponse`;
//! reqwest's status-as-error helpers are never called, so a 404 reaches the
//! mapper as data. Only failures to complete the exchange (connect, DNS,
//! TLS, timeout, body read) become `TransportError`. Redirects follow
//! reqwest's default policy and are invisible to the loader.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::TransportError;
use crate::http::{HttpClient, HttpClientResult, HttpResponse};

/// Settings applied when building the underlying `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: concat!("feed-core/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> HttpClientResult {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
