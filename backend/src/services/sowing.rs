//! Sowing planner service
//!
//! Assembles a climate year for a field, pairs it with a crop tolerance
//! profile (stored or entered manually) and runs the suitability analysis and
//! sowing window ranking from the shared crate.

use chrono::{Datelike, Utc};
use shared::{
    monthly_summary, plan_sowing, validate_climate_series, validate_crop_conditions,
    validate_top_n,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::PlannerConfig;
use crate::error::{AppError, AppResult};
use crate::external::ClimateArchiveClient;
use crate::models::{ClimateDay, CropConditions, GrowthPeriod, MonthlySuitability, SowingPlan};
use crate::services::{CropService, FieldService};

/// First year covered by the climate archive
pub const EARLIEST_CLIMATE_YEAR: i32 = 1940;

/// Sowing planner service
#[derive(Clone)]
pub struct SowingService {
    crops: CropService,
    fields: FieldService,
    climate: ClimateArchiveClient,
    planner: PlannerConfig,
}

impl SowingService {
    /// Create a new SowingService instance
    pub fn new(db: PgPool, climate: ClimateArchiveClient, planner: PlannerConfig) -> Self {
        Self {
            crops: CropService::new(db.clone()),
            fields: FieldService::new(db),
            climate,
            planner,
        }
    }

    /// Plan over a climate series supplied by the caller.
    ///
    /// The series must be ascending and gap-free; the analysis itself does not
    /// check this.
    pub fn plan(
        planner: &PlannerConfig,
        days: &[ClimateDay],
        conditions: &CropConditions,
        growth_period: GrowthPeriod,
        top_n: Option<usize>,
    ) -> AppResult<SowingPlan> {
        let top_n = top_n.unwrap_or(planner.default_top_n);
        validate_top_n(top_n).map_err(|msg| AppError::invalid("top_n", msg))?;
        validate_climate_series(days).map_err(|msg| AppError::invalid("days", msg))?;

        let plan = plan_sowing(
            days,
            conditions,
            growth_period,
            top_n,
            planner.selection_policy(),
        );

        tracing::debug!(
            "Planned {} windows over {} days ({}), {} shortlisted",
            plan.windows.len(),
            plan.analysis.total_days(),
            growth_period,
            plan.top_windows.len()
        );

        Ok(plan)
    }

    /// Climate year for a field
    pub async fn climate_for_field(
        &self,
        field_id: Uuid,
        year: Option<i32>,
    ) -> AppResult<Vec<ClimateDay>> {
        let year = resolve_year(year)?;
        let coordinates = self.fields.get_coordinates(field_id).await?;
        let days = self.climate.fetch_year(&coordinates, year).await?;

        validate_climate_series(&days).map_err(|msg| {
            tracing::warn!("Climate archive returned an unusable series for {}: {}", year, msg);
            AppError::ExternalService(format!("Incomplete climate data for {}: {}", year, msg))
        })?;

        Ok(days)
    }

    /// Plan for a stored crop on a field
    pub async fn plan_for_crop(
        &self,
        field_id: Uuid,
        crop_id: Uuid,
        year: Option<i32>,
        top_n: Option<usize>,
    ) -> AppResult<SowingPlan> {
        let crop = self.crops.get_crop(crop_id).await?;
        let growth_period = crop.growth_period()?;
        let days = self.climate_for_field(field_id, year).await?;

        tracing::info!(
            "Planning sowing for crop {} ({}) on field {}",
            crop.name,
            crop.id,
            field_id
        );

        Self::plan(&self.planner, &days, &crop.conditions(), growth_period, top_n)
    }

    /// Plan for a manually entered tolerance band on a field
    pub async fn plan_for_conditions(
        &self,
        field_id: Uuid,
        year: Option<i32>,
        conditions: CropConditions,
        growth_period: GrowthPeriod,
        top_n: Option<usize>,
    ) -> AppResult<SowingPlan> {
        validate_crop_conditions(&conditions).map_err(|msg| AppError::invalid("conditions", msg))?;
        let days = self.climate_for_field(field_id, year).await?;

        Self::plan(&self.planner, &days, &conditions, growth_period, top_n)
    }

    /// Per-month suitability of a stored crop on a field
    pub async fn monthly_for_crop(
        &self,
        field_id: Uuid,
        crop_id: Uuid,
        year: Option<i32>,
    ) -> AppResult<Vec<MonthlySuitability>> {
        let crop = self.crops.get_crop(crop_id).await?;
        let days = self.climate_for_field(field_id, year).await?;
        let analysis = shared::analyze_weather_for_crop(&days, &crop.conditions());

        Ok(monthly_summary(&analysis))
    }
}

/// Requested year, or the latest complete calendar year.
///
/// The current year is rejected: the archive cannot return all of its days.
pub fn resolve_year(year: Option<i32>) -> AppResult<i32> {
    let latest = Utc::now().year() - 1;
    let year = year.unwrap_or(latest);

    if !(EARLIEST_CLIMATE_YEAR..=latest).contains(&year) {
        return Err(AppError::invalid(
            "year",
            format!(
                "Year must be between {} and {}",
                EARLIEST_CLIMATE_YEAR, latest
            ),
        ));
    }

    Ok(year)
}
