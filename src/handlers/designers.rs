use axum::{
    extract::{Path, State},
    response::Json,
};
use validator::Validate;

use crate::{
    errors::ServiceError,
    services::{
        designers::{DesignerListItem, DesignerVerification, DesignerWorkHistory},
        sellers::VerifyRequest,
    },
    ApiResponse, ApiResult, AppState,
};

#[utoipa::path(
    get,
    path = "/admin/designers",
    responses(
        (status = 200, description = "Designers, newest first", body = ApiResponse<Vec<DesignerListItem>>)
    ),
    tag = "Designers"
)]
pub async fn list_designers(State(state): State<AppState>) -> ApiResult<Vec<DesignerListItem>> {
    let designers = state.services.designers.list().await?;
    Ok(Json(ApiResponse::success(designers)))
}

/// Portfolio works and hire-request history of one designer
#[utoipa::path(
    get,
    path = "/admin/designers/{id}/work-history",
    params(("id" = i32, Path, description = "Designer id")),
    responses(
        (status = 200, description = "Designer work history", body = ApiResponse<DesignerWorkHistory>),
        (status = 404, description = "Designer not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Designers"
)]
pub async fn get_designer_work_history(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<DesignerWorkHistory> {
    let history = state.services.designers.work_history(id).await?;
    Ok(Json(ApiResponse::success(history)))
}

#[utoipa::path(
    patch,
    path = "/admin/designers/{id}/verify",
    params(("id" = i32, Path, description = "Designer id")),
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Verification updated", body = ApiResponse<DesignerVerification>),
        (status = 400, description = "isVerified missing", body = crate::errors::ErrorResponse),
        (status = 404, description = "Designer not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Designers"
)]
pub async fn verify_designer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<VerifyRequest>,
) -> ApiResult<DesignerVerification> {
    let is_verified = payload
        .is_verified
        .ok_or_else(|| ServiceError::ValidationError("isVerified is required".to_string()))?;
    payload.validate()?;

    let result = state.services.designers.verify(id, is_verified).await?;
    Ok(Json(ApiResponse::success(result)))
}
