//! Casa admin API library
//!
//! Administration backend for the Core2Cover/Casa marketplace: the return and
//! refund approval workflow plus the admin directory of users, sellers,
//! designers, orders and contact messages.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod commands;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod metrics;
pub mod middleware_helpers;
pub mod migrator;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod tracing;

use axum::{
    http::HeaderValue,
    response::Json,
    routing::{delete, get, patch, post},
    Router,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{config::AppConfig, db::DbPool, events::EventSender};

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbPool>,
    pub config: Arc<AppConfig>,
    pub event_sender: Arc<EventSender>,
    pub services: handlers::AppServices,
}

impl AppState {
    pub fn new(db: Arc<DbPool>, config: AppConfig, event_sender: EventSender) -> Self {
        let event_sender = Arc::new(event_sender);
        let services = handlers::AppServices::new(db.clone(), event_sender.clone());
        Self {
            db,
            config: Arc::new(config),
            event_sender,
            services,
        }
    }
}

// Common response wrappers
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

#[derive(Serialize, ToSchema)]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

impl ResponseMeta {
    fn capture() -> Self {
        Self {
            request_id: crate::tracing::current_request_id().map(|rid| rid.as_str().to_string()),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
            meta: Some(ResponseMeta::capture()),
        }
    }
}

#[cfg(test)]
mod response_tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn success_response_includes_request_metadata() {
        let response =
            crate::tracing::scope_request_id(crate::tracing::RequestId::new("meta-123"), async {
                ApiResponse::success("ok")
            })
            .await;

        assert!(response.success);
        let meta = response.meta.expect("metadata expected");
        assert_eq!(meta.request_id.as_deref(), Some("meta-123"));
        DateTime::parse_from_rfc3339(&meta.timestamp).expect("timestamp should parse");
    }
}

/// Standard API result type for JSON responses
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, errors::ServiceError>;

/// Admin console routes.
pub fn admin_routes() -> Router<AppState> {
    let returns = Router::new()
        .route("/", get(handlers::returns::list_returns))
        .route("/:id", get(handlers::returns::get_return))
        .route("/:id/approve", patch(handlers::returns::approve_return))
        .route("/:id/reject", patch(handlers::returns::reject_return))
        .route("/:id/refund", patch(handlers::returns::refund_return));

    let users = Router::new()
        .route("/", get(handlers::users::list_users))
        .route("/:id", get(handlers::users::get_user));

    let sellers = Router::new()
        .route("/", get(handlers::sellers::list_sellers))
        .route("/:id", get(handlers::sellers::get_seller))
        .route("/:id/verify", patch(handlers::sellers::verify_seller));

    let designers = Router::new()
        .route("/", get(handlers::designers::list_designers))
        .route("/:id/verify", patch(handlers::designers::verify_designer))
        .route(
            "/:id/work-history",
            get(handlers::designers::get_designer_work_history),
        );

    Router::new()
        .route("/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/orders", get(handlers::orders::list_orders))
        .route(
            "/contact-messages",
            get(handlers::contact_messages::list_contact_messages),
        )
        .nest("/returns", returns)
        .nest("/users", users)
        .nest("/sellers", sellers)
        .nest("/designers", designers)
}

/// Seller self-service payout routes.
pub fn seller_routes() -> Router<AppState> {
    Router::new()
        .route("/upi", post(handlers::sellers::upsert_upi))
        .route("/:id/upi", delete(handlers::sellers::delete_upi))
}

/// Builds the CORS layer from configuration.
///
/// Credentials cannot be combined with wildcard headers, so explicit origins
/// mirror the request's method and headers instead.
pub fn cors_layer(cfg: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg
        .cors_origins()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if origins.is_empty() || cfg.cors_allow_any_origin {
        ::tracing::info!("Using permissive CORS");
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(cfg.cors_allow_credentials)
}

/// Full application router with every layer applied.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::<AppState>::new()
        .route("/", get(|| async { "casa-admin up" }))
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(metrics::metrics_handler))
        .nest("/admin", admin_routes())
        .nest("/seller", seller_routes())
        .merge(openapi::swagger_ui())
        .layer(TraceLayer::new_for_http().make_span_with(crate::tracing::RequestSpanMaker))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(axum::middleware::from_fn(metrics::http_metrics_middleware))
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}

pub mod prelude {
    pub use crate::commands::*;
    pub use crate::db::*;
    pub use crate::errors::*;
    pub use crate::events::*;
    pub use crate::models::*;
    pub use crate::tracing::*;
}
