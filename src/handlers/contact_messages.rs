use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{entities::contact_message, ApiResponse, ApiResult, AppState};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContactMessageQuery {
    /// Case-insensitive match on name, email or message
    pub search: Option<String>,
}

#[utoipa::path(
    get,
    path = "/admin/contact-messages",
    params(ContactMessageQuery),
    responses(
        (status = 200, description = "Contact messages, newest first", body = ApiResponse<Vec<contact_message::Model>>)
    ),
    tag = "Contact"
)]
pub async fn list_contact_messages(
    State(state): State<AppState>,
    Query(query): Query<ContactMessageQuery>,
) -> ApiResult<Vec<contact_message::Model>> {
    let messages = state
        .services
        .contact_messages
        .list(query.search.as_deref())
        .await?;
    Ok(Json(ApiResponse::success(messages)))
}
