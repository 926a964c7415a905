//! Climate suitability analysis and sowing window scheduling
//!
//! Pure, deterministic functions over an assembled climate year. Fetching,
//! sorting and validating the input is the caller's job.

mod plan;
mod selection;
mod suitability;
mod windows;

pub use plan::*;
pub use selection::*;
pub use suitability::*;
pub use windows::*;
