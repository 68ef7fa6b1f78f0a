// Canned MetricsBackend double shared by the data-layer tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::data::fetcher::FetchError;
use crate::data::provider::MetricsBackend;

#[derive(Default)]
pub(crate) struct CannedBackend {
    responses: HashMap<&'static str, Value>,
    fail_path: Option<&'static str>,
    pub(crate) calls: AtomicUsize,
    /// Every (path, query) pair this backend was asked for.
    pub(crate) queries: Mutex<Vec<(String, Vec<(String, String)>)>>,
}

impl CannedBackend {
    pub(crate) fn with(mut self, path: &'static str, body: Value) -> Self {
        self.responses.insert(path, body);
        self
    }

    pub(crate) fn failing(mut self, path: &'static str) -> Self {
        self.fail_path = Some(path);
        self
    }
}

#[async_trait]
impl MetricsBackend for CannedBackend {
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.queries.lock().unwrap().push((
            path.to_owned(),
            query
                .iter()
                .map(|(k, v)| ((*k).to_owned(), v.clone()))
                .collect(),
        ));

        if self.fail_path == Some(path) {
            return Err(FetchError::Status {
                url: format!("canned://{path}"),
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }

        Ok(self
            .responses
            .get(path)
            .cloned()
            .unwrap_or_else(|| serde_json::json!({})))
    }
}
