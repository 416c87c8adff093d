//! Thin reqwest wrapper executing shaped upstream calls.

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::error::DispatchError;
use crate::registry::Verb;
use crate::request::UpstreamRequest;

/// HTTP client for the upstream REST APIs. Cheap to clone; the inner
/// reqwest client shares its connection pool.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl StoreClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            timeout,
        }
    }

    /// Sends one upstream call and returns the decoded JSON.
    ///
    /// Non-2xx responses become [`DispatchError::Upstream`] carrying
    /// the status and the upstream's own `message` when it sent one.
    /// Empty 2xx bodies decode to `null`; non-JSON 2xx bodies are
    /// returned as a plain string.
    pub async fn execute(&self, request: &UpstreamRequest) -> Result<Value, DispatchError> {
        debug!(verb = request.verb.as_str(), url = %request.url, "upstream call");

        let mut builder = self
            .http
            .request(method_for(request.verb), &request.url)
            .timeout(self.timeout)
            .query(&request.query);
        if let Some((username, password)) = &request.basic_auth {
            builder = builder.basic_auth(username, Some(password));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "upstream rejected call");
            return Err(DispatchError::Upstream {
                message: upstream_message(&text, status.as_u16()),
                status: Some(status.as_u16()),
            });
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

fn method_for(verb: Verb) -> Method {
    match verb {
        Verb::Get => Method::GET,
        Verb::Post => Method::POST,
        Verb::Put => Method::PUT,
        Verb::Delete => Method::DELETE,
    }
}

fn transport_error(err: reqwest::Error) -> DispatchError {
    DispatchError::Upstream {
        message: err.to_string(),
        status: err.status().map(|s| s.as_u16()),
    }
}

/// Error bodies are usually JSON with a `message` field; fall back to
/// the raw text, then to the bare status code.
fn upstream_message(text: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
    }
    if text.is_empty() {
        format!("upstream returned status {status}")
    } else {
        text.to_string()
    }
}
