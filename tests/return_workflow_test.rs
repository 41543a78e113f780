//! Integration tests for the admin return workflow.
//!
//! Tests cover:
//! - Admin approval and rejection, including overwriting a prior decision
//! - Refund gating on both approvals
//! - Completed refunds being final and idempotent
//! - Listing with derived status and placeholder names
//! - Unknown ids
//! - Storage failures surfacing as server errors

mod common;

use assert_matches::assert_matches;
use axum::http::{Method, StatusCode};
use casa_admin::{
    entities::return_request::{self, ApprovalStatus, RefundStatus},
    errors::ServiceError,
    events::Event,
};
use common::{response_json, TestApp};
use chrono::Utc;
use rstest::rstest;
use sea_orm::{sea_query::Expr, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

async fn reload(app: &TestApp, id: i32) -> return_request::Model {
    return_request::Entity::find_by_id(id)
        .one(app.db())
        .await
        .expect("query return request")
        .expect("return request exists")
}

// ==================== Admin Decision Tests ====================

#[tokio::test]
async fn approve_records_decision_and_derives_approved_status() {
    let app = TestApp::new().await;
    let ret = app
        .seed_return_scenario(ApprovalStatus::Approved, ApprovalStatus::Pending, RefundStatus::Pending)
        .await;

    let response = app
        .request(Method::PATCH, &format!("/admin/returns/{}/approve", ret.id), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["adminApprovalStatus"], "APPROVED");
    assert_eq!(body["data"]["status"], "APPROVED");
    assert_eq!(body["data"]["refundStatus"], "PENDING");
    assert!(body["data"]["adminApprovedAt"].is_string());

    let stored = reload(&app, ret.id).await;
    assert_eq!(stored.admin_approval_status, ApprovalStatus::Approved);
    assert!(stored.admin_approved_at.is_some());

    let events = app.drain_events().await;
    assert_matches!(events.as_slice(), [Event::ReturnAdminApproved { return_id, .. }] if *return_id == ret.id);
}

#[tokio::test]
async fn reject_derives_rejected_status_even_if_seller_approved() {
    let app = TestApp::new().await;
    let ret = app
        .seed_return_scenario(ApprovalStatus::Approved, ApprovalStatus::Pending, RefundStatus::Pending)
        .await;

    let response = app
        .request(Method::PATCH, &format!("/admin/returns/{}/reject", ret.id), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["data"]["adminApprovalStatus"], "REJECTED");
    assert_eq!(body["data"]["status"], "REJECTED");

    let events = app.drain_events().await;
    assert_matches!(events.as_slice(), [Event::ReturnAdminRejected { .. }]);
}

#[tokio::test]
async fn admin_can_overwrite_a_previous_decision() {
    let app = TestApp::new().await;
    let ret = app
        .seed_return_scenario(ApprovalStatus::Approved, ApprovalStatus::Pending, RefundStatus::Pending)
        .await;
    let service = app.state.services.returns.clone();

    let before_reject = Utc::now();
    let rejected = service.reject(ret.id).await.expect("reject");
    assert_eq!(rejected.admin_approval_status, ApprovalStatus::Rejected);
    let rejected_at = rejected.admin_approved_at.expect("rejection is stamped");
    assert!(rejected_at >= before_reject);

    let before_approve = Utc::now();
    let approved = service.approve(ret.id).await.expect("approve");
    assert_eq!(approved.admin_approval_status, ApprovalStatus::Approved);
    let approved_at = approved.admin_approved_at.expect("approval is stamped");
    assert!(approved_at >= before_approve);
    assert!(approved_at >= rejected_at);
    assert_eq!(reload(&app, ret.id).await.admin_approved_at, Some(approved_at));
}

#[rstest]
#[case::approve("approve")]
#[case::reject("reject")]
#[tokio::test]
async fn admin_decision_on_completed_refund_is_refused(#[case] action: &str) {
    let app = TestApp::new().await;
    let ret = app
        .seed_return_scenario(ApprovalStatus::Approved, ApprovalStatus::Approved, RefundStatus::Completed)
        .await;

    let response = app
        .request(Method::PATCH, &format!("/admin/returns/{}/{}", ret.id, action), None)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Refund already completed");

    let stored = reload(&app, ret.id).await;
    assert_eq!(stored.admin_approval_status, ApprovalStatus::Approved);
    assert_eq!(stored.refund_status, RefundStatus::Completed);
    assert!(app.drain_events().await.is_empty());
}

// ==================== Refund Tests ====================

#[tokio::test]
async fn refund_follows_admin_then_seller_approval() {
    let app = TestApp::new().await;
    let ret = app
        .seed_return_scenario(ApprovalStatus::Pending, ApprovalStatus::Pending, RefundStatus::Pending)
        .await;
    let path = format!("/admin/returns/{}", ret.id);

    let approve = app
        .request(Method::PATCH, &format!("{}/approve", path), None)
        .await;
    assert_eq!(approve.status(), StatusCode::OK);

    let listed = response_json(app.request(Method::GET, &path, None).await).await;
    assert_eq!(listed["data"]["status"], "REQUESTED");
    assert_eq!(listed["data"]["adminApprovalStatus"], "APPROVED");
    assert_eq!(listed["data"]["sellerApprovalStatus"], "PENDING");

    // The seller decides through the seller app, not the admin API.
    return_request::Entity::update_many()
        .col_expr(
            return_request::Column::SellerApprovalStatus,
            Expr::value(ApprovalStatus::Approved),
        )
        .filter(return_request::Column::Id.eq(ret.id))
        .exec(app.db())
        .await
        .expect("seller approval");

    let refund = app
        .request(Method::PATCH, &format!("{}/refund", path), None)
        .await;
    assert_eq!(refund.status(), StatusCode::OK);

    let listed = response_json(app.request(Method::GET, &path, None).await).await;
    assert_eq!(listed["data"]["status"], "APPROVED");
    assert_eq!(listed["data"]["refundStatus"], "COMPLETED");
}

#[rstest]
#[case::seller_pending(ApprovalStatus::Pending, ApprovalStatus::Approved)]
#[case::admin_pending(ApprovalStatus::Approved, ApprovalStatus::Pending)]
#[case::seller_rejected(ApprovalStatus::Rejected, ApprovalStatus::Approved)]
#[case::admin_rejected(ApprovalStatus::Approved, ApprovalStatus::Rejected)]
#[tokio::test]
async fn refund_requires_both_approvals(
    #[case] seller: ApprovalStatus,
    #[case] admin: ApprovalStatus,
) {
    let app = TestApp::new().await;
    let ret = app
        .seed_return_scenario(seller, admin, RefundStatus::Pending)
        .await;

    let response = app
        .request(Method::PATCH, &format!("/admin/returns/{}/refund", ret.id), None)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Seller & Admin must approve first");

    let stored = reload(&app, ret.id).await;
    assert_eq!(stored.refund_status, RefundStatus::Pending);
    assert_eq!(stored.seller_approval_status, seller);
    assert_eq!(stored.admin_approval_status, admin);
}

#[tokio::test]
async fn refund_completes_once_both_parties_approved() {
    let app = TestApp::new().await;
    let ret = app
        .seed_return_scenario(ApprovalStatus::Approved, ApprovalStatus::Approved, RefundStatus::Pending)
        .await;

    let response = app
        .request(Method::PATCH, &format!("/admin/returns/{}/refund", ret.id), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["data"]["refundStatus"], "COMPLETED");
    assert_eq!(reload(&app, ret.id).await.refund_status, RefundStatus::Completed);

    let events = app.drain_events().await;
    assert_matches!(events.as_slice(), [Event::ReturnRefundCompleted { return_id }] if *return_id == ret.id);
}

#[tokio::test]
async fn repeated_refund_is_a_no_op() {
    let app = TestApp::new().await;
    let ret = app
        .seed_return_scenario(ApprovalStatus::Approved, ApprovalStatus::Approved, RefundStatus::Pending)
        .await;
    let service = app.state.services.returns.clone();

    service.issue_refund(ret.id).await.expect("first refund");
    let again = service.issue_refund(ret.id).await.expect("second refund");
    assert_eq!(again.refund_status, RefundStatus::Completed);

    let events = app.drain_events().await;
    assert_eq!(events.len(), 1, "only the first refund publishes an event");
}

#[tokio::test]
async fn concurrent_refunds_complete_exactly_once() {
    let app = TestApp::new().await;
    let ret = app
        .seed_return_scenario(ApprovalStatus::Approved, ApprovalStatus::Approved, RefundStatus::Pending)
        .await;
    let service = app.state.services.returns.clone();

    let (a, b) = tokio::join!(service.issue_refund(ret.id), service.issue_refund(ret.id));
    assert!(a.is_ok());
    assert!(b.is_ok());

    let completions = app
        .drain_events()
        .await
        .into_iter()
        .filter(|e| matches!(e, Event::ReturnRefundCompleted { .. }))
        .count();
    assert_eq!(completions, 1);
}

// ==================== Listing Tests ====================

#[tokio::test]
async fn list_shows_names_and_derived_status() {
    let app = TestApp::new().await;
    let ret = app
        .seed_return_scenario(ApprovalStatus::Pending, ApprovalStatus::Pending, RefundStatus::Pending)
        .await;

    let response = app.request(Method::GET, "/admin/returns", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let rows = body["data"].as_array().expect("array of returns");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], ret.id);
    assert_eq!(rows[0]["userName"], "Asha Rao");
    assert_eq!(rows[0]["userMobile"], "9876543210");
    assert_eq!(rows[0]["sellerName"], "Woodcraft");
    assert_eq!(rows[0]["status"], "REQUESTED");
    assert_eq!(rows[0]["reason"], "Damaged on arrival");
}

#[tokio::test]
async fn list_uses_placeholder_for_missing_phone() {
    let app = TestApp::new().await;
    let buyer = app.seed_user("No Phone", None).await;
    let seller = app.seed_seller("Loom House", false).await;
    let order = app
        .seed_order(buyer.id, rust_decimal::Decimal::ONE, chrono::Utc::now())
        .await;
    let item = app
        .seed_order_item(order.id, seller.id, "Rug", "pending")
        .await;
    app.seed_return(
        buyer.id,
        item.id,
        ApprovalStatus::Pending,
        ApprovalStatus::Pending,
        RefundStatus::Pending,
    )
    .await;

    let items = app.state.services.returns.list().await.expect("list");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].user_mobile, "-");
    assert_eq!(items[0].seller_name, "Loom House");
}

// ==================== Not Found Tests ====================

#[rstest]
#[case::get(Method::GET, "/admin/returns/999")]
#[case::approve(Method::PATCH, "/admin/returns/999/approve")]
#[case::reject(Method::PATCH, "/admin/returns/999/reject")]
#[case::refund(Method::PATCH, "/admin/returns/999/refund")]
#[tokio::test]
async fn unknown_return_is_not_found(#[case] method: Method, #[case] uri: &str) {
    let app = TestApp::new().await;

    let response = app.request(method, uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(app.drain_events().await.is_empty());
}

#[tokio::test]
async fn service_reports_not_found_for_unknown_id() {
    let app = TestApp::new().await;
    let result = app.state.services.returns.issue_refund(4242).await;
    assert_matches!(result, Err(ServiceError::NotFound(_)));
}

// ==================== Storage Failure Tests ====================

#[rstest]
#[case::list(Method::GET, "/admin/returns")]
#[case::refund(Method::PATCH, "/admin/returns/1/refund")]
#[case::approve(Method::PATCH, "/admin/returns/1/approve")]
#[tokio::test]
async fn storage_failure_is_a_server_error(#[case] method: Method, #[case] uri: &str) {
    let app = TestApp::new().await;
    app.seed_return_scenario(ApprovalStatus::Approved, ApprovalStatus::Approved, RefundStatus::Pending)
        .await;
    app.db()
        .execute_unprepared("DROP TABLE return_requests")
        .await
        .expect("drop table");

    let response = app.request(method, uri, None).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Internal Server Error");
    assert_eq!(body["message"], "Database error");
    assert!(app.drain_events().await.is_empty());
}
