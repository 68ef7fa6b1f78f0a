use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::BACKEND;
use crate::data::fetcher::{FetchError, fetch_json};

/// Abstract interface to the metrics backend, so the aggregator can be
/// exercised against a canned double in tests.
#[async_trait]
pub trait MetricsBackend: Send + Sync {
    /// GET `/metrics/<path>` with the given query pairs.
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, FetchError>;
}

pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        let client = match Client::builder()
            .connect_timeout(Duration::from_millis(BACKEND.connect_timeout_ms))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                log::warn!("failed to build http client with connect timeout: {e}");
                Client::new()
            }
        };

        Self { client, base_url }
    }

    // Query values here are ISO dates, small integers and single-letter
    // channel codes, so plain concatenation is enough.
    fn build_url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}/metrics/{}", self.base_url.trim_end_matches('/'), path);
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

#[async_trait]
impl MetricsBackend for HttpBackend {
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, FetchError> {
        fetch_json(&self.client, self.build_url(path, query)).await
    }
}
