//! Utility helpers shared across widget, bootstrap and page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, computed
//! styles, script tags, clocks) from component logic to improve reuse and
//! testability.

pub mod clock;
pub mod conflicts;
pub mod host;
pub mod script;
pub mod storage;
