//! Sowing plan composition and chart summaries

use chrono::Datelike;

use super::selection::{best_window, top_windows_with_policy, SelectionPolicy};
use super::suitability::analyze_weather_for_crop;
use super::windows::score_all_windows;
use crate::models::{
    ClimateDay, CropConditions, GrowthPeriod, MonthlySuitability, SowingPlan, SuitabilityAnalysis,
};

/// Run the analyzer, the window ranker and the selector over one climate year.
///
/// `days` must be sorted ascending by date without gaps; this is not checked
/// here (see `validate_climate_series`).
pub fn plan_sowing(
    days: &[ClimateDay],
    conditions: &CropConditions,
    growth_period: GrowthPeriod,
    top_n: usize,
    policy: SelectionPolicy,
) -> SowingPlan {
    let analysis = analyze_weather_for_crop(days, conditions);
    let windows = score_all_windows(days, conditions, growth_period);
    let best = best_window(&windows);
    let top_windows = top_windows_with_policy(&windows, top_n, policy);

    SowingPlan {
        growth_period_days: growth_period,
        analysis,
        windows,
        best,
        top_windows,
    }
}

/// Group analysed days by calendar month, in input order
pub fn monthly_summary(analysis: &SuitabilityAnalysis) -> Vec<MonthlySuitability> {
    let mut months: Vec<MonthlySuitability> = Vec::new();

    for analyzed in &analysis.analyzed_days {
        let (year, month) = (analyzed.day.date.year(), analyzed.day.date.month());

        let needs_new = months
            .last()
            .map(|m| m.year != year || m.month != month)
            .unwrap_or(true);
        if needs_new {
            months.push(MonthlySuitability {
                year,
                month,
                suitable_days: 0,
                unsuitable_days: 0,
                irrigation_days: 0,
                drainage_days: 0,
            });
        }

        if let Some(current) = months.last_mut() {
            if analyzed.is_suitable {
                current.suitable_days += 1;
            } else {
                current.unsuitable_days += 1;
            }
            current.irrigation_days += analyzed.needs_irrigation as usize;
            current.drainage_days += analyzed.needs_drainage as usize;
        }
    }

    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn year_of(temp_min: f64, temp_max: f64, precipitation: f64) -> Vec<ClimateDay> {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        (0..365)
            .map(|i| ClimateDay::new(start + Duration::days(i), temp_min, temp_max, precipitation))
            .collect()
    }

    #[test]
    fn test_plan_recommends_first_fully_suitable_date() {
        let days = year_of(12.0, 18.0, 10.0);
        let conditions = CropConditions::temperature_band(10.0, 20.0);
        let plan = plan_sowing(
            &days,
            &conditions,
            GrowthPeriod::new(90).unwrap(),
            10,
            SelectionPolicy::default(),
        );

        assert_eq!(plan.windows.len(), 365);
        assert_eq!(plan.recommended_sowing_date(), Some(days[0].date));
        // every window reaches 0.999
        assert_eq!(plan.top_windows.len(), 365);
    }

    #[test]
    fn test_monthly_summary_totals_match_analysis() {
        let mut days = year_of(12.0, 18.0, 2.0);
        for day in days.iter_mut().filter(|d| d.date.month() == 7) {
            day.temp_max = 35.0;
        }
        let conditions =
            CropConditions::temperature_band(10.0, 20.0).with_rainfall(Some(5.0), None);
        let analysis = analyze_weather_for_crop(&days, &conditions);
        let months = monthly_summary(&analysis);

        assert_eq!(months.len(), 12);
        assert_eq!(months[6].month, 7);
        assert_eq!(months[6].suitable_days, 0);
        assert_eq!(months[6].unsuitable_days, 31);
        assert_eq!(
            months.iter().map(|m| m.suitable_days).sum::<usize>(),
            analysis.suitable_days_count
        );
        assert_eq!(
            months.iter().map(|m| m.irrigation_days).sum::<usize>(),
            analysis.irrigation_days
        );
        assert_eq!(
            months.iter().map(|m| m.suitable_days + m.unsuitable_days).sum::<usize>(),
            analysis.total_days()
        );
        assert_eq!(analysis.total_days(), 365);
    }
}
