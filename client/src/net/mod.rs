//! Networking modules for the analysis backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam (gloo-net in the browser), `api` maps
//! endpoints to typed outcomes, and `types` defines the wire schema.

pub mod api;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
