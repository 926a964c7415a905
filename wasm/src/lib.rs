//! WebAssembly module for the agricultural operations platform
//!
//! Provides client-side computation for:
//! - Climate suitability analysis of a crop
//! - Sowing window ranking and shortlisting
//! - Offline validation of the inputs
//!
//! Inputs and outputs are JSON strings using the shared model field names.

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::analysis::*;
pub use shared::models::*;
pub use shared::validation::*;

fn parse_days(days_json: &str) -> Result<Vec<ClimateDay>, String> {
    let days: Vec<ClimateDay> = serde_json::from_str(days_json)
        .map_err(|e| format!("Invalid climate days JSON: {}", e))?;
    validate_climate_series(&days)?;
    Ok(days)
}

fn parse_conditions(conditions_json: &str) -> Result<CropConditions, String> {
    let conditions: CropConditions = serde_json::from_str(conditions_json)
        .map_err(|e| format!("Invalid crop conditions JSON: {}", e))?;
    validate_crop_conditions(&conditions)?;
    Ok(conditions)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Failed to encode result: {}", e))
}

fn analyze_json(days_json: &str, conditions_json: &str) -> Result<String, String> {
    let days = parse_days(days_json)?;
    let conditions = parse_conditions(conditions_json)?;
    to_json(&analyze_weather_for_crop(&days, &conditions))
}

fn plan_json(
    days_json: &str,
    conditions_json: &str,
    growth_period_days: u32,
    top_n: u32,
) -> Result<String, String> {
    let days = parse_days(days_json)?;
    let conditions = parse_conditions(conditions_json)?;
    let growth_period = GrowthPeriod::new(growth_period_days as usize)?;
    validate_top_n(top_n as usize)?;

    let plan = plan_sowing(
        &days,
        &conditions,
        growth_period,
        top_n as usize,
        SelectionPolicy::default(),
    );
    to_json(&plan)
}

fn best_json(
    days_json: &str,
    conditions_json: &str,
    growth_period_days: u32,
) -> Result<String, String> {
    let days = parse_days(days_json)?;
    let conditions = parse_conditions(conditions_json)?;
    let growth_period = GrowthPeriod::new(growth_period_days as usize)?;

    let scores = score_all_windows(&days, &conditions, growth_period);
    to_json(&best_window(&scores))
}

/// Analyse each day of a climate series for a crop
#[wasm_bindgen(js_name = analyzeWeatherForCrop)]
pub fn analyze_weather_for_crop_json(
    days_json: &str,
    conditions_json: &str,
) -> Result<String, JsValue> {
    analyze_json(days_json, conditions_json).map_err(|e| JsValue::from_str(&e))
}

/// Rank every sowing date and shortlist the best `top_n`
#[wasm_bindgen(js_name = rankSowingWindows)]
pub fn rank_sowing_windows(
    days_json: &str,
    conditions_json: &str,
    growth_period_days: u32,
    top_n: u32,
) -> Result<String, JsValue> {
    plan_json(days_json, conditions_json, growth_period_days, top_n)
        .map_err(|e| JsValue::from_str(&e))
}

/// Best sowing date and its suitability ratio
#[wasm_bindgen(js_name = bestSowingDate)]
pub fn best_sowing_date(
    days_json: &str,
    conditions_json: &str,
    growth_period_days: u32,
) -> Result<String, JsValue> {
    best_json(days_json, conditions_json, growth_period_days).map_err(|e| JsValue::from_str(&e))
}

/// Check a growth period before submitting a form
#[wasm_bindgen]
pub fn is_valid_growth_period(growth_period_days: u32) -> bool {
    GrowthPeriod::new(growth_period_days as usize).is_ok()
}
