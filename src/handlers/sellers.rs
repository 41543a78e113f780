use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::json;
use validator::Validate;

use crate::{
    entities::seller_bank_details,
    errors::ServiceError,
    services::sellers::{
        SellerDetail, SellerListItem, SellerVerification, UpsertUpiRequest, VerifyRequest,
    },
    ApiResponse, ApiResult, AppState,
};

#[utoipa::path(
    get,
    path = "/admin/sellers",
    responses(
        (status = 200, description = "Sellers, newest first", body = ApiResponse<Vec<SellerListItem>>)
    ),
    tag = "Sellers"
)]
pub async fn list_sellers(State(state): State<AppState>) -> ApiResult<Vec<SellerListItem>> {
    let sellers = state.services.sellers.list().await?;
    Ok(Json(ApiResponse::success(sellers)))
}

#[utoipa::path(
    get,
    path = "/admin/sellers/{id}",
    params(("id" = i32, Path, description = "Seller id")),
    responses(
        (status = 200, description = "Seller with business and bank details", body = ApiResponse<SellerDetail>),
        (status = 404, description = "Seller not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Sellers"
)]
pub async fn get_seller(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<SellerDetail> {
    let seller = state.services.sellers.detail(id).await?;
    Ok(Json(ApiResponse::success(seller)))
}

/// Set or clear the seller's verified flag
#[utoipa::path(
    patch,
    path = "/admin/sellers/{id}/verify",
    params(("id" = i32, Path, description = "Seller id")),
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Verification updated", body = ApiResponse<SellerVerification>),
        (status = 400, description = "isVerified missing", body = crate::errors::ErrorResponse),
        (status = 404, description = "Seller not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Sellers"
)]
pub async fn verify_seller(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<VerifyRequest>,
) -> ApiResult<SellerVerification> {
    let is_verified = payload
        .is_verified
        .ok_or_else(|| ServiceError::ValidationError("isVerified is required".to_string()))?;
    payload.validate()?;

    let result = state.services.sellers.verify(id, is_verified).await?;
    Ok(Json(ApiResponse::success(result)))
}

/// Create or replace a seller's payout UPI id
#[utoipa::path(
    post,
    path = "/seller/upi",
    request_body = UpsertUpiRequest,
    responses(
        (status = 200, description = "UPI saved", body = ApiResponse<seller_bank_details::Model>),
        (status = 400, description = "Missing fields or invalid UPI format", body = crate::errors::ErrorResponse),
        (status = 404, description = "Seller not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Sellers"
)]
pub async fn upsert_upi(
    State(state): State<AppState>,
    Json(payload): Json<UpsertUpiRequest>,
) -> ApiResult<seller_bank_details::Model> {
    let saved = state.services.sellers.upsert_upi(payload).await?;
    Ok(Json(ApiResponse::success(saved)))
}

#[utoipa::path(
    delete,
    path = "/seller/{id}/upi",
    params(("id" = i32, Path, description = "Seller id")),
    responses(
        (status = 200, description = "Bank details removed"),
        (status = 404, description = "No bank details for this seller", body = crate::errors::ErrorResponse)
    ),
    tag = "Sellers"
)]
pub async fn delete_upi(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<serde_json::Value> {
    state.services.sellers.delete_upi(id).await?;
    Ok(Json(ApiResponse::success(json!({ "sellerId": id }))))
}
