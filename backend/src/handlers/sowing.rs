//! HTTP handlers for climate suitability and sowing window endpoints

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::validate_crop_conditions;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{ClimateDay, CropConditions, GrowthPeriod, MonthlySuitability, SowingPlan};
use crate::services::{ReportingService, SowingService};
use crate::AppState;

/// Inline analysis request: climate data and tolerance band supplied by the caller
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(length(min = 1, max = 366))]
    pub days: Vec<ClimateDay>,
    pub conditions: CropConditions,
    #[validate(range(min = 1))]
    pub growth_period_days: usize,
    #[validate(range(min = 1))]
    pub top_n: Option<usize>,
}

/// Manual tolerance form for a field
#[derive(Debug, Deserialize, Validate)]
pub struct FieldPlanRequest {
    pub year: Option<i32>,
    pub conditions: CropConditions,
    #[validate(range(min = 1))]
    pub growth_period_days: usize,
    #[validate(range(min = 1))]
    pub top_n: Option<usize>,
}

/// Query parameters for plans over a stored crop
#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    pub year: Option<i32>,
    pub top_n: Option<usize>,
    pub format: Option<String>, // "json" or "csv"
}

/// Query parameters selecting a climate year
#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: Option<i32>,
}

fn growth_period(days: usize) -> AppResult<GrowthPeriod> {
    GrowthPeriod::new(days).map_err(|msg| AppError::invalid("growth_period_days", msg))
}

fn sowing_service(state: &AppState) -> SowingService {
    SowingService::new(
        state.db.clone(),
        state.climate.clone(),
        state.config.planner.clone(),
    )
}

/// Analyse an inline climate series
pub async fn analyze_sowing(
    State(state): State<AppState>,
    Json(input): Json<AnalyzeRequest>,
) -> AppResult<Json<SowingPlan>> {
    input.validate()?;
    validate_crop_conditions(&input.conditions)
        .map_err(|msg| AppError::invalid("conditions", msg))?;
    let growth_period = growth_period(input.growth_period_days)?;

    let plan = SowingService::plan(
        &state.config.planner,
        &input.days,
        &input.conditions,
        growth_period,
        input.top_n,
    )?;
    Ok(Json(plan))
}

/// Get the climate year for a field
pub async fn get_field_climate(
    State(state): State<AppState>,
    Path(field_id): Path<Uuid>,
    Query(query): Query<YearQuery>,
) -> AppResult<Json<Vec<ClimateDay>>> {
    let days = sowing_service(&state)
        .climate_for_field(field_id, query.year)
        .await?;
    Ok(Json(days))
}

/// Get the sowing plan of a stored crop on a field
pub async fn get_crop_sowing_plan(
    State(state): State<AppState>,
    Path((field_id, crop_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<PlanQuery>,
) -> AppResult<impl IntoResponse> {
    let plan = sowing_service(&state)
        .plan_for_crop(field_id, crop_id, query.year, query.top_n)
        .await?;

    if query.format.as_deref() == Some("csv") {
        let csv = ReportingService::export_to_csv(&plan.top_windows)?;
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv"),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"sowing_windows.csv\""),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(plan).into_response())
    }
}

/// Plan a field against a manually entered tolerance band
pub async fn create_field_sowing_plan(
    State(state): State<AppState>,
    Path(field_id): Path<Uuid>,
    Json(input): Json<FieldPlanRequest>,
) -> AppResult<Json<SowingPlan>> {
    input.validate()?;
    let growth_period = growth_period(input.growth_period_days)?;

    let plan = sowing_service(&state)
        .plan_for_conditions(
            field_id,
            input.year,
            input.conditions,
            growth_period,
            input.top_n,
        )
        .await?;
    Ok(Json(plan))
}

/// Get per-month suitability of a stored crop on a field
pub async fn get_crop_monthly_suitability(
    State(state): State<AppState>,
    Path((field_id, crop_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<YearQuery>,
) -> AppResult<Json<Vec<MonthlySuitability>>> {
    let months = sowing_service(&state)
        .monthly_for_crop(field_id, crop_id, query.year)
        .await?;
    Ok(Json(months))
}
