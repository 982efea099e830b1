//! HTTP client construction, auth headers and status mapping.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::AgentError;

/// Build the HTTP client shared by the model provider and the tool.
///
/// The caller owns the returned client; clones share one connection pool
/// and the pool is released when the last clone is dropped.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, AgentError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| AgentError::Configuration(format!("Failed to build HTTP client: {e}")))
}

/// Build default headers for a Bearer-token API.
///
/// An empty key yields no `Authorization` header (local backends).
pub fn bearer_headers(api_key: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        if let Ok(val) = HeaderValue::from_str(&format!("Bearer {key}")) {
            headers.insert(AUTHORIZATION, val);
        }
    }
    headers
}

/// Map a non-success HTTP status into an error.
pub fn status_to_error(status: u16, body: &str) -> AgentError {
    match status {
        401 | 403 => AgentError::Authentication(body.to_string()),
        429 => AgentError::RateLimited {
            retry_after_ms: extract_retry_after(body),
        },
        _ => AgentError::api(status, body),
    }
}

fn extract_retry_after(body: &str) -> Option<u64> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("retry_after"))
                .and_then(|r| r.as_f64())
                .map(|s| (s * 1000.0) as u64)
        })
}
