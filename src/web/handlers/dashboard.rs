//! # Dashboard Report Handlers
//!
//! HTTP handlers for the four admin reports. Each delegates to the
//! [`ReportAssembler`](crate::analytics::ReportAssembler), which serves from
//! the derived data cache when the report key is live and recomputes from the
//! store otherwise.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::analytics::{BarCharts, DashboardStats, LineCharts, PieCharts};
use crate::web::errors::ApiResult;
use crate::web::extractors::AdminUser;
use crate::web::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: DashboardStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PieResponse {
    pub success: bool,
    pub charts: PieCharts,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BarResponse {
    pub success: bool,
    pub charts: BarCharts,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LineResponse {
    pub success: bool,
    pub charts: LineCharts,
}

/// Dashboard landing stats: GET /api/v1/dashboard/stats
pub async fn get_stats(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> ApiResult<Json<StatsResponse>> {
    let stats = state.reports.dashboard_stats(Utc::now()).await?;
    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}

/// Pie chart figures: GET /api/v1/dashboard/pie
pub async fn get_pie_charts(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> ApiResult<Json<PieResponse>> {
    let charts = state.reports.pie_charts(Utc::now()).await?;
    Ok(Json(PieResponse {
        success: true,
        charts,
    }))
}

/// Bar chart figures: GET /api/v1/dashboard/bar
pub async fn get_bar_charts(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> ApiResult<Json<BarResponse>> {
    let charts = state.reports.bar_charts(Utc::now()).await?;
    Ok(Json(BarResponse {
        success: true,
        charts,
    }))
}

/// Line chart figures: GET /api/v1/dashboard/line
pub async fn get_line_charts(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> ApiResult<Json<LineResponse>> {
    let charts = state.reports.line_charts(Utc::now()).await?;
    Ok(Json(LineResponse {
        success: true,
        charts,
    }))
}
