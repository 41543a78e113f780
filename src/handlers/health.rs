use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{db, AppState};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub database: String,
    pub version: String,
}

/// Liveness plus a database round-trip
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database_ok = db::check_connection(&state.db).await.is_ok();
    let status = if database_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = HealthResponse {
        status: if database_ok { "ok" } else { "degraded" }.to_string(),
        service: "casa-admin".to_string(),
        database: if database_ok { "up" } else { "down" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (status, Json(body))
}
