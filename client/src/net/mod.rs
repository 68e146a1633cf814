//! Networking modules for identity-gateway HTTP calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs same-origin REST calls and `types` defines the wire schema
//! they decode.

pub mod api;
pub mod types;
