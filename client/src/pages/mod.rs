//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guarding, fetching, redirects)
//! and delegates chrome to `components`.

pub mod analysis;
pub mod dashboard;
pub mod history;
pub mod login;
