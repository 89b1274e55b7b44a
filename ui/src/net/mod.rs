//! Networking modules for the chat backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single POST per sent message and `types` defines the
//! wire schema shared with the backend.

pub mod api;
pub mod types;
