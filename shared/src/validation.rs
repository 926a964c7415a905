//! Validation utilities for the agricultural operations platform
//!
//! The analysis functions accept whatever they are given; these checks run at
//! the boundary, before climate data or user input reaches them.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::models::{ClimateDay, CropConditions};

// ============================================================================
// Sowing Analysis Validations
// ============================================================================

/// Validate the size of a sowing window shortlist
pub fn validate_top_n(top_n: usize) -> Result<(), &'static str> {
    if top_n == 0 {
        return Err("Shortlist size must be at least 1");
    }
    Ok(())
}

/// Validate a crop tolerance band entered manually
pub fn validate_crop_conditions(conditions: &CropConditions) -> Result<(), &'static str> {
    if !conditions.min_temperature.is_finite() || !conditions.max_temperature.is_finite() {
        return Err("Temperature bounds must be numbers");
    }
    if conditions.min_temperature > conditions.max_temperature {
        return Err("Minimum temperature cannot exceed maximum temperature");
    }
    if let (Some(min), Some(max)) = (conditions.min_rainfall, conditions.max_rainfall) {
        if min > max {
            return Err("Minimum rainfall cannot exceed maximum rainfall");
        }
    }
    let negative_rainfall = [conditions.min_rainfall, conditions.max_rainfall]
        .iter()
        .flatten()
        .any(|r| *r < 0.0);
    if negative_rainfall {
        return Err("Rainfall bounds cannot be negative");
    }
    Ok(())
}

/// Validate that a climate series is ascending by date with no gaps
pub fn validate_climate_series(days: &[ClimateDay]) -> Result<(), &'static str> {
    if days.is_empty() {
        return Err("Climate series is empty");
    }
    for pair in days.windows(2) {
        if pair[1].date <= pair[0].date {
            return Err("Climate series must be sorted ascending by date");
        }
        if pair[1].date - pair[0].date != Duration::days(1) {
            return Err("Climate series has missing days");
        }
    }
    if days.iter().any(|d| d.precipitation < 0.0) {
        return Err("Precipitation cannot be negative");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate GPS coordinates are on the globe
pub fn validate_coordinates(latitude: Decimal, longitude: Decimal) -> Result<(), &'static str> {
    if latitude < Decimal::from(-90) || latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90");
    }
    if longitude < Decimal::from(-180) || longitude > Decimal::from(180) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}
