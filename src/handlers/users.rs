use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::{
    services::users::{UserDetail, UserSummary},
    ApiResponse, ApiResult, AppState,
};

#[utoipa::path(
    get,
    path = "/admin/users",
    responses(
        (status = 200, description = "Users, newest first", body = ApiResponse<Vec<UserSummary>>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserSummary>> {
    let users = state.services.users.list().await?;
    Ok(Json(ApiResponse::success(users)))
}

/// A user with their orders and return requests
#[utoipa::path(
    get,
    path = "/admin/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User detail", body = ApiResponse<UserDetail>),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<UserDetail> {
    let user = state.services.users.detail(id).await?;
    Ok(Json(ApiResponse::success(user)))
}
