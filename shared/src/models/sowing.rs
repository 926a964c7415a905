//! Sowing window models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{GrowthPeriod, SuitabilityAnalysis};

/// Score of one candidate sowing start date
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SowingWindowScore {
    pub start_date: NaiveDate,
    /// Suitable days in the window divided by the growth period length
    pub suitable_ratio: f64,
    pub irrigation_days: usize,
    pub drainage_days: usize,
}

/// Single best sowing start date
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BestWindow {
    pub best_start_date: NaiveDate,
    pub best_score: f64,
}

/// Full sowing plan for a crop over one climate year
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SowingPlan {
    pub growth_period_days: GrowthPeriod,
    pub analysis: SuitabilityAnalysis,
    /// One score per start date, in date order
    pub windows: Vec<SowingWindowScore>,
    pub best: Option<BestWindow>,
    /// Shortlist, best first
    pub top_windows: Vec<SowingWindowScore>,
}

impl SowingPlan {
    /// Date to pre-fill as the recommended sowing date
    pub fn recommended_sowing_date(&self) -> Option<NaiveDate> {
        self.best.map(|best| best.best_start_date)
    }
}
