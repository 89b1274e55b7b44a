//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` renders the embeddable assistant; `industry_card` and
//! `auth_button` make up the home page.

pub mod auth_button;
pub mod chat_widget;
pub mod industry_card;
