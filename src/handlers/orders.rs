use axum::{extract::State, response::Json};

use crate::{services::orders::OrderListItem, ApiResponse, ApiResult, AppState};

/// Orders with buyer and per-item seller
#[utoipa::path(
    get,
    path = "/admin/orders",
    responses(
        (status = 200, description = "Orders, newest first", body = ApiResponse<Vec<OrderListItem>>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Vec<OrderListItem>> {
    let orders = state.services.orders.list().await?;
    Ok(Json(ApiResponse::success(orders)))
}
