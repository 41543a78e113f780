use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    errors::ServiceError, services::dashboard::DashboardSummary, ApiResponse, ApiResult, AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// Days covered by the orders chart (defaults to the configured window)
    #[param(minimum = 1, maximum = 365)]
    pub days: Option<u32>,
}

/// Dashboard counters and charts
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummary>),
        (status = 400, description = "Invalid window", body = crate::errors::ErrorResponse)
    ),
    tag = "Dashboard"
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardQuery>,
) -> ApiResult<DashboardSummary> {
    let days = params.days.unwrap_or(state.config.dashboard_window_days);
    if days == 0 || days > 365 {
        return Err(ServiceError::ValidationError(
            "Days must be between 1 and 365".to_string(),
        ));
    }

    let summary = state.services.dashboard.summary(days).await?;
    Ok(Json(ApiResponse::success(summary)))
}
