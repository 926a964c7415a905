//! Selection of the best sowing windows

use serde::{Deserialize, Serialize};

use crate::models::{BestWindow, SowingWindowScore};

/// Bounds of the adaptive threshold search, in thousandths of a ratio
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// First threshold tried (999 = 0.999)
    pub start_threshold_millis: u32,
    /// Lowest threshold tried before falling back to plain top-N
    pub floor_threshold_millis: u32,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            start_threshold_millis: 999,
            floor_threshold_millis: 400,
        }
    }
}

/// Best window: the first start date with the highest ratio.
///
/// Scores are scanned in the order given and only a strictly greater ratio
/// replaces the current best, so ties resolve to the earliest date.
pub fn best_window(scores: &[SowingWindowScore]) -> Option<BestWindow> {
    let (first, rest) = scores.split_first()?;

    let best = rest.iter().fold(first, |best, score| {
        if score.suitable_ratio > best.suitable_ratio {
            score
        } else {
            best
        }
    });

    Some(BestWindow {
        best_start_date: best.start_date,
        best_score: best.suitable_ratio,
    })
}

/// Shortlist of at least `top_n` windows using the default policy
pub fn top_windows(scores: &[SowingWindowScore], top_n: usize) -> Vec<SowingWindowScore> {
    top_windows_with_policy(scores, top_n, SelectionPolicy::default())
}

/// Shortlist of the best windows, highest ratio first.
///
/// Thresholds are tried from `start_threshold_millis` down to
/// `floor_threshold_millis` in steps of 0.001. The first threshold that at
/// least `top_n` windows reach returns every window at or above it, which may
/// be more than `top_n`. When no threshold qualifies the first
/// `min(top_n, scores.len())` windows of the sorted list are returned.
/// Equal ratios keep their input order.
pub fn top_windows_with_policy(
    scores: &[SowingWindowScore],
    top_n: usize,
    policy: SelectionPolicy,
) -> Vec<SowingWindowScore> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.suitable_ratio.total_cmp(&a.suitable_ratio));

    for millis in (policy.floor_threshold_millis..=policy.start_threshold_millis).rev() {
        let threshold = millis as f64 / 1000.0;
        let qualifying = sorted.partition_point(|s| s.suitable_ratio >= threshold);
        if qualifying >= top_n {
            sorted.truncate(qualifying);
            return sorted;
        }
    }

    sorted.truncate(top_n.min(sorted.len()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn scores(ratios: &[f64]) -> Vec<SowingWindowScore> {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        ratios
            .iter()
            .enumerate()
            .map(|(i, &suitable_ratio)| SowingWindowScore {
                start_date: start + Duration::days(i as i64),
                suitable_ratio,
                irrigation_days: 0,
                drainage_days: 0,
            })
            .collect()
    }

    #[test]
    fn test_best_window_keeps_earliest_tie() {
        let scores = scores(&[0.2, 0.8, 0.5, 0.8]);
        let best = best_window(&scores).unwrap();
        assert_eq!(best.best_start_date, scores[1].start_date);
        assert_eq!(best.best_score, 0.8);
    }

    #[test]
    fn test_best_window_empty() {
        assert_eq!(best_window(&[]), None);
    }

    #[test]
    fn test_best_window_all_zero_is_first_date() {
        let scores = scores(&[0.0, 0.0, 0.0]);
        assert_eq!(best_window(&scores).unwrap().best_start_date, scores[0].start_date);
    }

    #[test]
    fn test_threshold_returns_all_qualifying() {
        // three windows at 1.0 reach 0.999 together, top_n = 2
        let scores = scores(&[1.0, 0.5, 1.0, 1.0, 0.9]);
        let top = top_windows(&scores, 2);
        assert_eq!(top.len(), 3);
        assert!(top.iter().all(|s| s.suitable_ratio == 1.0));
        // stable order for ties
        assert_eq!(top[0].start_date, scores[0].start_date);
        assert_eq!(top[1].start_date, scores[2].start_date);
        assert_eq!(top[2].start_date, scores[3].start_date);
    }

    #[test]
    fn test_threshold_descends_until_enough() {
        let scores = scores(&[0.95, 0.91, 0.9, 0.42, 0.1]);
        let top = top_windows(&scores, 3);
        let ratios: Vec<f64> = top.iter().map(|s| s.suitable_ratio).collect();
        assert_eq!(ratios, vec![0.95, 0.91, 0.9]);
    }

    #[test]
    fn test_fallback_below_floor() {
        let scores = scores(&[0.1, 0.3, 0.2, 0.0]);
        let top = top_windows(&scores, 2);
        let ratios: Vec<f64> = top.iter().map(|s| s.suitable_ratio).collect();
        assert_eq!(ratios, vec![0.3, 0.2]);
    }

    #[test]
    fn test_fallback_fewer_scores_than_top_n() {
        let scores = scores(&[1.0, 0.7]);
        assert_eq!(top_windows(&scores, 5).len(), 2);
    }

    #[test]
    fn test_zero_top_n_returns_start_threshold_set() {
        let scores = scores(&[1.0, 0.5]);
        assert_eq!(top_windows(&scores, 0).len(), 1);
    }

    #[test]
    fn test_custom_policy_floor() {
        let scores = scores(&[0.95, 0.85, 0.6]);
        let policy = SelectionPolicy {
            start_threshold_millis: 999,
            floor_threshold_millis: 900,
        };
        // 0.85 is below the floor, so the plain top-2 fallback applies
        let top = top_windows_with_policy(&scores, 2, policy);
        assert_eq!(top.len(), 2);
        assert_eq!(top[1].suitable_ratio, 0.85);
    }
}
