use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::{services::returns::ReturnListItem, ApiResponse, ApiResult, AppState};

/// List every return request with its derived status
#[utoipa::path(
    get,
    path = "/admin/returns",
    responses(
        (status = 200, description = "Return requests, newest first", body = ApiResponse<Vec<ReturnListItem>>),
        (status = 500, description = "Storage failure", body = crate::errors::ErrorResponse)
    ),
    tag = "Returns"
)]
pub async fn list_returns(State(state): State<AppState>) -> ApiResult<Vec<ReturnListItem>> {
    let returns = state.services.returns.list().await?;
    Ok(Json(ApiResponse::success(returns)))
}

#[utoipa::path(
    get,
    path = "/admin/returns/{id}",
    params(("id" = i32, Path, description = "Return request id")),
    responses(
        (status = 200, description = "Return request", body = ApiResponse<ReturnListItem>),
        (status = 404, description = "Unknown return request", body = crate::errors::ErrorResponse)
    ),
    tag = "Returns"
)]
pub async fn get_return(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<ReturnListItem> {
    let item = state.services.returns.get(id).await?;
    Ok(Json(ApiResponse::success(item)))
}

/// Record the admin's approval
#[utoipa::path(
    patch,
    path = "/admin/returns/{id}/approve",
    params(("id" = i32, Path, description = "Return request id")),
    responses(
        (status = 200, description = "Approval recorded", body = ApiResponse<ReturnListItem>),
        (status = 400, description = "Refund already completed", body = crate::errors::ErrorResponse),
        (status = 404, description = "Unknown return request", body = crate::errors::ErrorResponse)
    ),
    tag = "Returns"
)]
pub async fn approve_return(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<ReturnListItem> {
    let updated = state.services.returns.approve(id).await?;
    Ok(Json(ApiResponse::success(updated)))
}

/// Record the admin's rejection
#[utoipa::path(
    patch,
    path = "/admin/returns/{id}/reject",
    params(("id" = i32, Path, description = "Return request id")),
    responses(
        (status = 200, description = "Rejection recorded", body = ApiResponse<ReturnListItem>),
        (status = 400, description = "Refund already completed", body = crate::errors::ErrorResponse),
        (status = 404, description = "Unknown return request", body = crate::errors::ErrorResponse)
    ),
    tag = "Returns"
)]
pub async fn reject_return(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<ReturnListItem> {
    let updated = state.services.returns.reject(id).await?;
    Ok(Json(ApiResponse::success(updated)))
}

/// Complete the refund once seller and admin have both approved
#[utoipa::path(
    patch,
    path = "/admin/returns/{id}/refund",
    params(("id" = i32, Path, description = "Return request id")),
    responses(
        (status = 200, description = "Refund completed, or already was", body = ApiResponse<ReturnListItem>),
        (status = 400, description = "Seller & Admin must approve first", body = crate::errors::ErrorResponse),
        (status = 404, description = "Unknown return request", body = crate::errors::ErrorResponse)
    ),
    tag = "Returns"
)]
pub async fn refund_return(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<ReturnListItem> {
    let updated = state.services.returns.issue_refund(id).await?;
    Ok(Json(ApiResponse::success(updated)))
}
