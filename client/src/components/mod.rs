//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the welcome page chrome and read shared state from
//! Leptos context providers or props.

pub mod feature_grid;
pub mod navbar;
pub mod phone_mockup;
