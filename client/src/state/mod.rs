//! Client-side state models shared across pages and components.

pub mod auth;
pub mod session;
pub mod ui;
