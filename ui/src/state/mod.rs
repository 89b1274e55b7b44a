//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `industry`, `auth`) as plain structs.
//! Components hold them in signals; the transitions themselves never touch
//! the DOM, so they are tested natively.

pub mod auth;
pub mod chat;
pub mod industry;
