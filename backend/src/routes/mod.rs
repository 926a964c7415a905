//! Route definitions for the agricultural operations API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Inline analysis, no stored data involved
        .nest("/sowing", sowing_routes())
        // Field-scoped climate and sowing plans
        .nest("/fields", field_routes())
}

/// Sowing analysis routes
fn sowing_routes() -> Router<AppState> {
    Router::new().route("/analyze", post(handlers::analyze_sowing))
}

/// Field climate and sowing plan routes
fn field_routes() -> Router<AppState> {
    Router::new()
        .route("/:field_id/climate", get(handlers::get_field_climate))
        .route(
            "/:field_id/sowing-plan",
            post(handlers::create_field_sowing_plan),
        )
        .route(
            "/:field_id/crops/:crop_id/sowing-plan",
            get(handlers::get_crop_sowing_plan),
        )
        .route(
            "/:field_id/crops/:crop_id/monthly-suitability",
            get(handlers::get_crop_monthly_suitability),
        )
}
