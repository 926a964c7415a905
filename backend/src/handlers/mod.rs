//! HTTP handlers for the agricultural operations API

pub mod health;
pub mod sowing;

pub use health::health_check;
pub use sowing::{
    analyze_sowing, create_field_sowing_plan, get_crop_monthly_suitability,
    get_crop_sowing_plan, get_field_climate,
};
