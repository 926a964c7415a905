//! Crop tolerance models

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Environmental tolerance band of a crop
///
/// `min_temperature <= max_temperature` is the caller's responsibility; the
/// analyzer compares against the bounds as given.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CropConditions {
    pub min_temperature: f64,
    pub max_temperature: f64,
    /// Below this daily rainfall (mm) the day is flagged for irrigation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rainfall: Option<f64>,
    /// Above this daily rainfall (mm) the day is flagged for drainage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rainfall: Option<f64>,
}

impl CropConditions {
    /// Temperature band only, precipitation never evaluated
    pub fn temperature_band(min_temperature: f64, max_temperature: f64) -> Self {
        Self {
            min_temperature,
            max_temperature,
            min_rainfall: None,
            max_rainfall: None,
        }
    }

    pub fn with_rainfall(mut self, min_rainfall: Option<f64>, max_rainfall: Option<f64>) -> Self {
        self.min_rainfall = min_rainfall;
        self.max_rainfall = max_rainfall;
        self
    }
}

/// Length of a crop's growth period in days, never zero
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "usize", into = "usize")]
pub struct GrowthPeriod(NonZeroUsize);

impl GrowthPeriod {
    /// Build a growth period, rejecting zero.
    ///
    /// Periods longer than the climate series are allowed; the ranker draws
    /// them from the wraparound and scores the truncated windows lower.
    pub fn new(days: usize) -> Result<Self, &'static str> {
        NonZeroUsize::new(days)
            .map(Self)
            .ok_or("Growth period must be at least one day")
    }

    pub fn days(&self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for GrowthPeriod {
    type Error = &'static str;

    fn try_from(days: usize) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<GrowthPeriod> for usize {
    fn from(period: GrowthPeriod) -> Self {
        period.days()
    }
}

impl std::fmt::Display for GrowthPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} days", self.days())
    }
}
