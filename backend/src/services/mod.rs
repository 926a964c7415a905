//! Business logic services for the agricultural operations platform

pub mod crop;
pub mod field;
pub mod reporting;
pub mod sowing;

pub use crop::CropService;
pub use field::FieldService;
pub use reporting::ReportingService;
pub use sowing::SowingService;
