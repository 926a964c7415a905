//! Daily climate models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of observed climate at a location
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClimateDay {
    pub date: NaiveDate,
    /// Daily minimum temperature in °C
    pub temp_min: f64,
    /// Daily maximum temperature in °C
    pub temp_max: f64,
    /// Daily precipitation in mm
    pub precipitation: f64,
}

impl ClimateDay {
    pub fn new(date: NaiveDate, temp_min: f64, temp_max: f64, precipitation: f64) -> Self {
        Self {
            date,
            temp_min,
            temp_max,
            precipitation,
        }
    }
}

/// A climate day after evaluation against a crop's tolerance band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AnalyzedDay {
    #[serde(flatten)]
    pub day: ClimateDay,
    pub is_suitable: bool,
    pub needs_irrigation: bool,
    pub needs_drainage: bool,
}

/// Result of analysing a climate series for a crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuitabilityAnalysis {
    pub suitable_days_count: usize,
    pub unsuitable_days_count: usize,
    pub irrigation_days: usize,
    pub drainage_days: usize,
    pub analyzed_days: Vec<AnalyzedDay>,
}

impl SuitabilityAnalysis {
    pub fn total_days(&self) -> usize {
        self.analyzed_days.len()
    }
}

/// Per-month suitability counts, in the shape the chart layer consumes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlySuitability {
    pub year: i32,
    pub month: u32,
    pub suitable_days: usize,
    pub unsuitable_days: usize,
    pub irrigation_days: usize,
    pub drainage_days: usize,
}
