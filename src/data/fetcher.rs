use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// A failed metric request. Always carries the URL so log lines point at
/// the endpoint that broke.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: StatusCode },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// GET a JSON document. Non-2xx, transport and parse failures are logged
/// and handed back to the caller. No retry.
pub async fn fetch_json(client: &Client, url: String) -> Result<Value, FetchError> {
    let result = get_json(client, &url).await;
    if let Err(err) = &result {
        log::error!("metric fetch failed: {err}");
    }
    result
}

async fn get_json(client: &Client, url: &str) -> Result<Value, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_owned(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_owned(),
            status,
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|source| FetchError::Decode {
            url: url.to_owned(),
            source,
        })
}
