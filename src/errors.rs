use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::error::DbErr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn current_request_id() -> Option<String> {
    crate::tracing::current_request_id().map(|rid| rid.as_str().to_string())
}

/// Error body returned by every failing admin endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "error": "Bad Request",
    "message": "Seller & Admin must approve first",
    "request_id": "0b6f1c5e-1f3a-4d7b-9a53-6c1f2f0d9a11",
    "timestamp": "2026-05-01T10:30:00.000Z"
}))]
pub struct ErrorResponse {
    /// HTTP status category (e.g., "Not Found", "Bad Request")
    #[schema(example = "Bad Request")]
    pub error: String,
    /// Human-readable error description
    pub message: String,
    /// Request identifier echoed from the `x-request-id` header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// RFC 3339 timestamp when the error occurred
    pub timestamp: String,
}

#[derive(Debug, thiserror::Error, Serialize)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(
        #[from]
        #[serde(skip)]
        DbErr,
    ),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A workflow rule refused the transition. The message is shown to admins verbatim.
    #[error("{0}")]
    PreconditionFailed(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl ServiceError {
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        ServiceError::NotFound(format!("{} with ID {} not found", entity, id))
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PreconditionFailed(_) | Self::ValidationError(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::DatabaseError(_) | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message suitable for HTTP responses. Storage and internal failures never leak details.
    pub fn response_message(&self) -> String {
        match self {
            Self::DatabaseError(_) => "Database error".to_string(),
            Self::InternalError(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }

    /// Short label used for the `outcome` metric dimension.
    pub fn outcome_label(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::PreconditionFailed(_) => "precondition_failed",
            Self::ValidationError(_) | Self::BadRequest(_) => "invalid",
            _ => "error",
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let err = ErrorResponse {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.response_message(),
            request_id: current_request_id(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(err)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ServiceError::NotFound("x".into()), StatusCode::NOT_FOUND ; "not found")]
    #[test_case(ServiceError::PreconditionFailed("x".into()), StatusCode::BAD_REQUEST ; "precondition")]
    #[test_case(ServiceError::ValidationError("x".into()), StatusCode::BAD_REQUEST ; "validation")]
    #[test_case(ServiceError::BadRequest("x".into()), StatusCode::BAD_REQUEST ; "bad request")]
    #[test_case(ServiceError::DatabaseError(DbErr::Custom("boom".into())), StatusCode::INTERNAL_SERVER_ERROR ; "database")]
    #[test_case(ServiceError::InternalError("x".into()), StatusCode::INTERNAL_SERVER_ERROR ; "internal")]
    fn maps_status_codes(err: ServiceError, expected: StatusCode) {
        assert_eq!(err.status_code(), expected);
    }

    #[test]
    fn precondition_message_is_verbatim() {
        let err = ServiceError::PreconditionFailed(
            "Seller & Admin must approve first".into(),
        );
        assert_eq!(
            err.response_message(),
            "Seller & Admin must approve first"
        );
    }

    #[test]
    fn database_error_does_not_leak_details() {
        let err = ServiceError::DatabaseError(DbErr::Custom("secret table name".into()));
        assert_eq!(err.response_message(), "Database error");
    }
}
