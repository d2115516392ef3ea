//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, history,
//! session persistence) from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod connection;
pub mod format;
pub mod session_store;
pub mod storage;
