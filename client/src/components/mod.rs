//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome (navigation, notices) and the route guard,
//! reading and writing shared state from Leptos context providers.

pub mod auth_guard;
pub mod navbar;
pub mod notice;
