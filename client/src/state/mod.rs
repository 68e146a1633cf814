//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth` for the identity session, `carousel`
//! for the hero mockup) so components depend on small focused models.

pub mod auth;
pub mod carousel;
