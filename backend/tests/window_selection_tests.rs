//! Sowing window shortlist tests
//!
//! Verifies the adaptive threshold shortlist:
//! - Prefers every window at or above the highest qualifying threshold
//! - Falls back to the plain top N when suitability is scarce
//! - Never returns an empty list when scores exist

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use shared::{
    plan_sowing, score_all_windows, top_windows, ClimateDay, CropConditions, GrowthPeriod,
    SelectionPolicy, SowingWindowScore,
};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

fn scores_from(ratios: &[f64]) -> Vec<SowingWindowScore> {
    ratios
        .iter()
        .enumerate()
        .map(|(i, &suitable_ratio)| SowingWindowScore {
            start_date: start() + Duration::days(i as i64),
            suitable_ratio,
            irrigation_days: 0,
            drainage_days: 0,
        })
        .collect()
}

fn year(temp_min: f64, temp_max: f64) -> Vec<ClimateDay> {
    (0..365)
        .map(|i| ClimateDay::new(start() + Duration::days(i), temp_min, temp_max, 5.0))
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

mod shortlist {
    use super::*;

    #[test]
    fn unsuitable_crop_falls_back_to_top_ten() {
        let days = year(12.0, 18.0);
        let conditions = CropConditions::temperature_band(100.0, 120.0);
        let scores = score_all_windows(&days, &conditions, GrowthPeriod::new(90).unwrap());

        let top = top_windows(&scores, 10);

        assert_eq!(top.len(), 10);
        assert!(top.iter().all(|s| s.suitable_ratio == 0.0));
        // stable sort keeps the earliest dates first
        assert_eq!(top[0].start_date, days[0].date);
        assert_eq!(top[9].start_date, days[9].date);
    }

    #[test]
    fn result_is_sorted_descending() {
        let scores = scores_from(&[0.5, 0.9, 0.7, 0.95, 0.6]);
        let top = top_windows(&scores, 4);
        let ratios: Vec<f64> = top.iter().map(|s| s.suitable_ratio).collect();
        assert_eq!(ratios, vec![0.95, 0.9, 0.7, 0.6]);
    }

    #[test]
    fn all_windows_at_threshold_are_returned() {
        // 20 perfect windows, asking for 5
        let mut ratios = vec![1.0; 20];
        ratios.extend([0.5; 10]);
        let top = top_windows(&scores_from(&ratios), 5);
        assert_eq!(top.len(), 20);
    }

    #[test]
    fn threshold_keeps_ties_at_cutoff() {
        let scores = scores_from(&[0.8, 0.75, 0.75, 0.75, 0.3]);
        let top = top_windows(&scores, 2);
        // 0.750 is the first threshold reached by two windows; all three 0.75 qualify
        assert_eq!(top.len(), 4);
    }

    #[test]
    fn empty_scores_give_empty_shortlist() {
        assert!(top_windows(&[], 10).is_empty());
    }

    #[test]
    fn plan_combines_all_stages() {
        // suitable from April through September only
        let days: Vec<ClimateDay> = (0..365)
            .map(|i| {
                let date = start() + Duration::days(i);
                let (min, max) = if (90..273).contains(&i) { (14.0, 24.0) } else { (-2.0, 8.0) };
                ClimateDay::new(date, min, max, 3.0)
            })
            .collect();
        let conditions =
            CropConditions::temperature_band(10.0, 28.0).with_rainfall(Some(2.0), Some(40.0));

        let plan = plan_sowing(
            &days,
            &conditions,
            GrowthPeriod::new(120).unwrap(),
            10,
            SelectionPolicy::default(),
        );

        assert_eq!(plan.analysis.suitable_days_count, 183);
        assert_eq!(plan.windows.len(), 365);
        assert_eq!(plan.recommended_sowing_date(), Some(days[90].date));
        assert_eq!(plan.best.unwrap().best_score, 1.0);
        assert!(plan.top_windows.len() >= 10);
        assert!(plan.top_windows.iter().all(|s| s.suitable_ratio == 1.0));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod property_tests {
    use super::*;

    /// Ratios on a growth-period grid, as the ranker produces them
    fn ratios_strategy() -> impl Strategy<Value = Vec<f64>> {
        (1usize..=120).prop_flat_map(|period| {
            proptest::collection::vec(0usize..=period, 0..200).prop_map(move |counts| {
                counts
                    .into_iter()
                    .map(|c| c as f64 / period as f64)
                    .collect::<Vec<f64>>()
            })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Never fewer than min(top_n, len) windows
        #[test]
        fn prop_shortlist_lower_bound(ratios in ratios_strategy(), top_n in 1usize..=30) {
            let scores = scores_from(&ratios);
            let top = top_windows(&scores, top_n);
            prop_assert!(top.len() >= top_n.min(scores.len()));
        }

        /// More than top_n only when every extra window ties or beats the cutoff
        #[test]
        fn prop_shortlist_upper_bound(ratios in ratios_strategy(), top_n in 1usize..=30) {
            let scores = scores_from(&ratios);
            let top = top_windows(&scores, top_n);

            if top.len() > top_n {
                let cutoff = top.last().unwrap().suitable_ratio;
                prop_assert!(cutoff >= 0.4);
                let at_or_above = scores.iter().filter(|s| s.suitable_ratio >= cutoff).count();
                prop_assert_eq!(top.len(), at_or_above);
            }
        }

        /// Shortlist is ordered best first
        #[test]
        fn prop_shortlist_descending(ratios in ratios_strategy(), top_n in 1usize..=30) {
            let top = top_windows(&scores_from(&ratios), top_n);
            prop_assert!(top.windows(2).all(|w| w[0].suitable_ratio >= w[1].suitable_ratio));
        }

        /// No window outside the shortlist beats one inside it
        #[test]
        fn prop_shortlist_holds_best(ratios in ratios_strategy(), top_n in 1usize..=30) {
            let scores = scores_from(&ratios);
            let top = top_windows(&scores, top_n);

            if let Some(worst) = top.last() {
                let left_out_better = scores
                    .iter()
                    .filter(|s| !top.iter().any(|t| t.start_date == s.start_date))
                    .any(|s| s.suitable_ratio > worst.suitable_ratio);
                prop_assert!(!left_out_better);
            }
        }

        /// Same inputs always produce the same shortlist
        #[test]
        fn prop_shortlist_deterministic(ratios in ratios_strategy(), top_n in 1usize..=30) {
            let scores = scores_from(&ratios);
            prop_assert_eq!(top_windows(&scores, top_n), top_windows(&scores, top_n));
        }
    }
}
