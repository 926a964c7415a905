//! Day-by-day suitability of a climate series for a crop

use crate::models::{AnalyzedDay, ClimateDay, CropConditions, SuitabilityAnalysis};

/// Evaluate a single day against the crop's tolerance band.
///
/// Suitability depends on temperature only. Rainfall outside the optional
/// band raises the irrigation or drainage flag but never disqualifies the day.
/// NaN inputs fail every comparison: the day is unsuitable and unflagged.
pub fn analyze_day(day: &ClimateDay, conditions: &CropConditions) -> AnalyzedDay {
    let is_temp_ok =
        day.temp_min >= conditions.min_temperature && day.temp_max <= conditions.max_temperature;

    let needs_irrigation = conditions
        .min_rainfall
        .map(|min| day.precipitation < min)
        .unwrap_or(false);

    let needs_drainage = conditions
        .max_rainfall
        .map(|max| day.precipitation > max)
        .unwrap_or(false);

    AnalyzedDay {
        day: *day,
        is_suitable: is_temp_ok,
        needs_irrigation,
        needs_drainage,
    }
}

/// Analyse every day of the series, preserving order
pub fn analyze_weather_for_crop(days: &[ClimateDay], conditions: &CropConditions) -> SuitabilityAnalysis {
    let analyzed_days: Vec<AnalyzedDay> = days
        .iter()
        .map(|day| analyze_day(day, conditions))
        .collect();

    let suitable_days_count = analyzed_days.iter().filter(|d| d.is_suitable).count();
    let irrigation_days = analyzed_days.iter().filter(|d| d.needs_irrigation).count();
    let drainage_days = analyzed_days.iter().filter(|d| d.needs_drainage).count();

    SuitabilityAnalysis {
        suitable_days_count,
        unsuitable_days_count: analyzed_days.len() - suitable_days_count,
        irrigation_days,
        drainage_days,
        analyzed_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(temp_min: f64, temp_max: f64, precipitation: f64) -> ClimateDay {
        ClimateDay::new(
            NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            temp_min,
            temp_max,
            precipitation,
        )
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        let conditions = CropConditions::temperature_band(10.0, 20.0);
        assert!(analyze_day(&day(10.0, 20.0, 0.0), &conditions).is_suitable);
        assert!(!analyze_day(&day(9.9, 20.0, 0.0), &conditions).is_suitable);
        assert!(!analyze_day(&day(10.0, 20.1, 0.0), &conditions).is_suitable);
    }

    #[test]
    fn test_rainfall_edges_are_exclusive() {
        let conditions =
            CropConditions::temperature_band(10.0, 20.0).with_rainfall(Some(5.0), Some(50.0));
        let at_min = analyze_day(&day(12.0, 18.0, 5.0), &conditions);
        let at_max = analyze_day(&day(12.0, 18.0, 50.0), &conditions);
        assert!(!at_min.needs_irrigation);
        assert!(!at_max.needs_drainage);
    }

    #[test]
    fn test_nan_temperature_is_unsuitable() {
        let conditions =
            CropConditions::temperature_band(10.0, 20.0).with_rainfall(Some(5.0), Some(50.0));
        let analyzed = analyze_day(&day(f64::NAN, 18.0, f64::NAN), &conditions);
        assert!(!analyzed.is_suitable);
        assert!(!analyzed.needs_irrigation);
        assert!(!analyzed.needs_drainage);
    }

    #[test]
    fn test_empty_series() {
        let analysis = analyze_weather_for_crop(&[], &CropConditions::temperature_band(0.0, 1.0));
        assert_eq!(analysis.suitable_days_count, 0);
        assert_eq!(analysis.unsuitable_days_count, 0);
        assert!(analysis.analyzed_days.is_empty());
    }
}
