//! Models for the agricultural operations backend
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
