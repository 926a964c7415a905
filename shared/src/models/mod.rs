//! Domain models for the agricultural operations platform

mod climate;
mod crop;
mod field;
mod sowing;

pub use climate::*;
pub use crop::*;
pub use field::*;
pub use sowing::*;
