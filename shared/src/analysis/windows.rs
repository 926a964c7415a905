//! Sowing window scoring over a circular climate year
//!
//! A window that starts near the end of the series borrows its remaining days
//! from the start of the series, as if the year repeated. Conceptually the
//! series is extended by its own first `growth_period` days (clamped to the
//! series length) and every start date in the original series is scored over
//! `growth_period` consecutive days of that extension. Windows that run past
//! the extension are truncated and still divided by the full growth period.

use std::ops::Sub;

use super::suitability::analyze_day;
use crate::models::{ClimateDay, CropConditions, GrowthPeriod, SowingWindowScore};

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    suitable: usize,
    irrigation: usize,
    drainage: usize,
}

impl Sub for Tally {
    type Output = Tally;

    fn sub(self, rhs: Tally) -> Tally {
        Tally {
            suitable: self.suitable - rhs.suitable,
            irrigation: self.irrigation - rhs.irrigation,
            drainage: self.drainage - rhs.drainage,
        }
    }
}

/// Score every possible sowing start date in `days`.
///
/// Returns exactly `days.len()` scores in date order. Each day is classified
/// once; window totals come from prefix sums over the wrapped index space.
pub fn score_all_windows(
    days: &[ClimateDay],
    conditions: &CropConditions,
    growth_period: GrowthPeriod,
) -> Vec<SowingWindowScore> {
    let n = days.len();
    if n == 0 {
        return Vec::new();
    }

    let period = growth_period.days();
    let extended_len = n + period.min(n);

    let flags: Vec<Tally> = days
        .iter()
        .map(|day| {
            let analyzed = analyze_day(day, conditions);
            Tally {
                suitable: analyzed.is_suitable as usize,
                irrigation: analyzed.needs_irrigation as usize,
                drainage: analyzed.needs_drainage as usize,
            }
        })
        .collect();

    // prefix[k] = totals over extended[0..k]; extended[j] == days[j % n]
    let mut prefix = Vec::with_capacity(extended_len + 1);
    let mut running = Tally::default();
    prefix.push(running);
    for j in 0..extended_len {
        let flag = flags[j % n];
        running.suitable += flag.suitable;
        running.irrigation += flag.irrigation;
        running.drainage += flag.drainage;
        prefix.push(running);
    }

    (0..n)
        .map(|start| {
            let end = start.saturating_add(period).min(extended_len);
            let window = prefix[end] - prefix[start];
            SowingWindowScore {
                start_date: days[start].date,
                suitable_ratio: window.suitable as f64 / period as f64,
                irrigation_days: window.irrigation,
                drainage_days: window.drainage,
            }
        })
        .collect()
}
