//! Wire DTOs for the chat backend.
//!
//! DESIGN
//! ======
//! The backend is an external collaborator; these types pin the request and
//! response shapes it expects on `POST {apiUrl}/chat`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST {apiUrl}/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
    pub include_search: bool,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self { message: message.into(), session_id: session_id.into(), include_search: false }
    }
}

/// Successful reply body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
