//! HTTP call to the chat backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: the call fails as a transport error,
//! since the endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a [`ChatError`] instead of panics. The widget converts every
//! error into a fixed bot reply; nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::ChatResponse;
use super::types::ChatRequest;

/// Failure modes of one chat round trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The backend answered with a non-2xx status.
    #[error("chat request failed: {0}")]
    Status(u16),
    /// The request never completed (DNS, CORS, offline, ...).
    #[error("chat transport error: {0}")]
    Transport(String),
    /// A 2xx answer whose body lacked a `response` string.
    #[error("chat response malformed: {0}")]
    Decode(String),
}

/// Post one message and return the assistant's reply text.
///
/// # Errors
///
/// See [`ChatError`].
pub async fn send_chat(endpoint: &str, request: &ChatRequest) -> Result<String, ChatError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ChatError::Status(resp.status()));
        }
        let body: ChatResponse = resp.json().await.map_err(|e| ChatError::Decode(e.to_string()))?;
        Ok(body.response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, request);
        Err(ChatError::Transport("not available on server".to_owned()))
    }
}
