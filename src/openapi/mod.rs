use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Casa Admin API",
        version = "0.1.0",
        description = r#"
# Casa Admin API

Administration backend for the Core2Cover/Casa marketplace.

## Return workflow

A return request moves through seller approval, admin approval and refund.
A refund can only be issued once both the seller and the admin have approved,
and a completed refund is final:

- `PATCH /admin/returns/{id}/approve` and `/reject` record the admin decision
- `PATCH /admin/returns/{id}/refund` completes the refund, and repeating it is a no-op

## Error Handling

Errors use a consistent body:

```json
{
  "error": "Bad Request",
  "message": "Seller & Admin must approve first",
  "timestamp": "2024-01-01T00:00:00Z"
}
```
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development")
    ),
    tags(
        (name = "Returns", description = "Return and refund workflow"),
        (name = "Dashboard", description = "Admin dashboard counters and charts"),
        (name = "Users", description = "Buyer directory"),
        (name = "Sellers", description = "Seller directory, verification and payout details"),
        (name = "Designers", description = "Designer directory, verification and work history"),
        (name = "Orders", description = "Order listing"),
        (name = "Contact", description = "Contact form messages"),
        (name = "Health", description = "Health check endpoints")
    ),
    paths(
        // Returns
        crate::handlers::returns::list_returns,
        crate::handlers::returns::get_return,
        crate::handlers::returns::approve_return,
        crate::handlers::returns::reject_return,
        crate::handlers::returns::refund_return,

        // Dashboard
        crate::handlers::dashboard::get_dashboard,

        // Directory
        crate::handlers::users::list_users,
        crate::handlers::users::get_user,
        crate::handlers::sellers::list_sellers,
        crate::handlers::sellers::get_seller,
        crate::handlers::sellers::verify_seller,
        crate::handlers::sellers::upsert_upi,
        crate::handlers::sellers::delete_upi,
        crate::handlers::designers::list_designers,
        crate::handlers::designers::verify_designer,
        crate::handlers::designers::get_designer_work_history,
        crate::handlers::orders::list_orders,
        crate::handlers::contact_messages::list_contact_messages,

        crate::handlers::health::health_check,
    ),
    components(
        schemas(
            // Return types
            crate::services::returns::ReturnListItem,
            crate::entities::return_request::ApprovalStatus,
            crate::entities::return_request::RefundStatus,
            crate::models::DisplayStatus,

            // Dashboard types
            crate::services::dashboard::DashboardSummary,
            crate::services::dashboard::DashboardStats,
            crate::services::dashboard::DailyOrders,
            crate::services::dashboard::NamedCount,

            // Directory types
            crate::services::users::UserSummary,
            crate::services::users::UserDetail,
            crate::services::sellers::SellerListItem,
            crate::services::sellers::SellerDetail,
            crate::services::sellers::VerifyRequest,
            crate::services::sellers::SellerVerification,
            crate::services::sellers::UpsertUpiRequest,
            crate::services::designers::DesignerListItem,
            crate::services::designers::DesignerVerification,
            crate::services::designers::DesignerWorkHistory,
            crate::services::designers::DesignerSummary,
            crate::services::designers::ProjectHistoryItem,
            crate::entities::designer_work::Model,
            crate::services::orders::OrderListItem,
            crate::entities::contact_message::Model,
            crate::entities::seller_bank_details::Model,
            crate::entities::seller_delivery_details::Model,

            crate::handlers::health::HealthResponse,

            // Error types
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_admin_routes() {
        let openapi = ApiDocV1::openapi();
        let json = serde_json::to_string_pretty(&openapi).unwrap();
        assert!(json.contains("Casa Admin API"));
        assert!(json.contains("/admin/designers/{id}/work-history"));
        assert!(json.contains("/admin/returns/{id}/refund"));
        assert!(json.contains("/seller/upi"));
        assert!(json.contains("ReturnListItem"));
    }
}
