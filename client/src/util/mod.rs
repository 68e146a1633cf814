//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser scheduling and navigation helpers kept out of page and
//! component logic.

pub mod carousel;
pub mod navigation;
