//! Remote clipboard transport
//!
//! Lets the system-text half of the clipboard follow a clipboard server on
//! another machine (e.g. the host of a VM driving this one). The server speaks
//! JSON-RPC 2.0 over HTTP and exposes `paste()` and `copy(text)`.
//!
//! Remote sync is best-effort: callers treat every [`TransportError`] as a cue
//! to continue with the local clipboard only.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    /// Endpoint unreachable, timed out or answered with an HTTP error status
    #[error("Remote clipboard unreachable: {0}")]
    Network(String),

    /// The server answered with a JSON-RPC error object
    #[error("Remote clipboard error ({code}): {message}")]
    Protocol { code: i64, message: String },

    #[error("Invalid remote clipboard response: {0}")]
    Parse(String),

    #[error("Could not start remote clipboard runtime: {0}")]
    Runtime(String),
}

pub trait RemoteTransport {
    /// Text currently on the remote clipboard
    fn paste(&self) -> Result<String, TransportError>;

    fn copy(&self, text: &str) -> Result<(), TransportError>;
}

/// Blocking JSON-RPC client for a remote clipboard server.
///
/// Requests run on a private single-threaded tokio runtime, so this must not
/// be called from inside another tokio runtime.
#[derive(Debug)]
pub struct JsonRpcTransport {
    client: Client,
    url: String,
    runtime: tokio::runtime::Runtime,
    next_id: AtomicU64,
}

impl JsonRpcTransport {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| TransportError::Runtime(e.to_string()))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            runtime,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn call(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request_body = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": id,
        });

        #[cfg(debug_assertions)]
        log::debug!("Remote clipboard call {} (id {}) to {}", method, id, self.url);

        let response: Result<Value, TransportError> = self.runtime.block_on(async {
            let response = self
                .client
                .post(&self.url)
                .json(&request_body)
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?
                .error_for_status()
                .map_err(|e| TransportError::Network(e.to_string()))?;

            response
                .json::<Value>()
                .await
                .map_err(|e| TransportError::Parse(e.to_string()))
        });

        parse_response(response?)
    }
}

impl RemoteTransport for JsonRpcTransport {
    fn paste(&self) -> Result<String, TransportError> {
        match self.call("paste", json!([]))? {
            Value::String(text) => Ok(text),
            other => Err(TransportError::Parse(format!(
                "expected string from paste, got {}",
                other
            ))),
        }
    }

    fn copy(&self, text: &str) -> Result<(), TransportError> {
        self.call("copy", json!([text])).map(|_| ())
    }
}

/// Extract the `result` member of a JSON-RPC response, turning an `error`
/// member into [`TransportError::Protocol`].
pub fn parse_response(mut response: Value) -> Result<Value, TransportError> {
    if let Some(error) = response.get("error").filter(|e| !e.is_null()) {
        let code = error.get("code").and_then(Value::as_i64).unwrap_or(0);
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        return Err(TransportError::Protocol { code, message });
    }

    response
        .get_mut("result")
        .map(Value::take)
        .ok_or_else(|| TransportError::Parse("response has neither result nor error".to_string()))
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod remote_tests;
