//! Shared types and models for the agricultural operations platform
//!
//! This crate contains the domain models and the climate suitability and
//! sowing window analysis shared between the backend, the browser (via WASM),
//! and other components of the system.

pub mod analysis;
pub mod models;
pub mod types;
pub mod validation;

pub use analysis::*;
pub use models::*;
pub use types::*;
pub use validation::*;
