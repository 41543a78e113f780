//! Integration tests for the admin dashboard aggregates.

mod common;

use axum::http::{Method, StatusCode};
use casa_admin::entities::return_request::{ApprovalStatus, RefundStatus};
use chrono::{Duration, Utc};
use common::{response_json, TestApp};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[tokio::test]
async fn empty_platform_reports_zeroes() {
    let app = TestApp::new().await;

    let summary = app.state.services.dashboard.summary(30).await.expect("summary");

    assert_eq!(summary.stats.total_users, 0);
    assert_eq!(summary.stats.total_orders, 0);
    assert_eq!(summary.stats.completed_orders, 0);
    assert!(summary.orders_over_time.is_empty());

    let names: Vec<_> = summary.returns_by_status.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["REQUESTED", "APPROVED", "REJECTED"]);
    assert!(summary.returns_by_status.iter().all(|c| c.value == 0));
}

#[tokio::test]
async fn stats_count_entities_returns_and_completed_orders() {
    let app = TestApp::new().await;
    let buyer = app.seed_user("Meera", None).await;
    let seller = app.seed_seller("Brass & Co", true).await;
    app.seed_designer("Kabir Shah", Some("Available"), false).await;

    // Fully fulfilled order.
    let done = app.seed_order(buyer.id, dec!(100), Utc::now()).await;
    let done_item = app.seed_order_item(done.id, seller.id, "Lamp", "fulfilled").await;
    // Mixed order: one item still open.
    let mixed = app.seed_order(buyer.id, dec!(50), Utc::now()).await;
    app.seed_order_item(mixed.id, seller.id, "Vase", "fulfilled").await;
    let open_item = app.seed_order_item(mixed.id, seller.id, "Bowl", "shipped").await;
    // An order without items counts as completed.
    app.seed_order(buyer.id, dec!(10), Utc::now()).await;

    app.seed_return(
        buyer.id,
        done_item.id,
        ApprovalStatus::Approved,
        ApprovalStatus::Approved,
        RefundStatus::Completed,
    )
    .await;
    app.seed_return(
        buyer.id,
        open_item.id,
        ApprovalStatus::Pending,
        ApprovalStatus::Approved,
        RefundStatus::Pending,
    )
    .await;

    let stats = app.state.services.dashboard.stats().await.expect("stats");

    assert_eq!(stats.total_users, 1);
    assert_eq!(stats.total_sellers, 1);
    assert_eq!(stats.total_designers, 1);
    assert_eq!(stats.total_orders, 3);
    assert_eq!(stats.completed_orders, 2);
    assert_eq!(stats.pending_returns, 1);
    assert_eq!(stats.completed_refunds, 1);
}

#[tokio::test]
async fn returns_histogram_uses_derived_status() {
    let app = TestApp::new().await;
    let ret = app
        .seed_return_scenario(ApprovalStatus::Approved, ApprovalStatus::Rejected, RefundStatus::Pending)
        .await;
    app.seed_return(
        ret.user_id,
        ret.order_item_id,
        ApprovalStatus::Approved,
        ApprovalStatus::Approved,
        RefundStatus::Pending,
    )
    .await;
    app.seed_return(
        ret.user_id,
        ret.order_item_id,
        ApprovalStatus::Pending,
        ApprovalStatus::Approved,
        RefundStatus::Pending,
    )
    .await;

    let histogram = app
        .state
        .services
        .dashboard
        .returns_by_status()
        .await
        .expect("histogram");

    let values: Vec<(String, u64)> = histogram.into_iter().map(|c| (c.name, c.value)).collect();
    assert_eq!(
        values,
        vec![
            ("REQUESTED".to_string(), 1),
            ("APPROVED".to_string(), 1),
            ("REJECTED".to_string(), 1),
        ]
    );
}

#[tokio::test]
async fn orders_over_time_skips_orders_outside_window() {
    let app = TestApp::new().await;
    let buyer = app.seed_user("Ravi", None).await;
    let now = Utc::now();

    app.seed_order(buyer.id, dec!(200), now - Duration::days(2)).await;
    app.seed_order(buyer.id, dec!(300), now - Duration::days(2)).await;
    app.seed_order(buyer.id, dec!(75), now).await;
    app.seed_order(buyer.id, dec!(999), now - Duration::days(45)).await;

    let summary = app.state.services.dashboard.summary(30).await.expect("summary");
    let days = summary.orders_over_time;

    assert_eq!(days.len(), 2);
    assert!(days[0].date < days[1].date, "buckets ascend by day");
    assert_eq!(days[0].orders, 2);
    assert_eq!(days[0].revenue, dec!(500));
    assert_eq!(days[1].orders, 1);
    assert_eq!(days[1].revenue, Decimal::from(75));
}

#[tokio::test]
async fn dashboard_endpoint_validates_window() {
    let app = TestApp::new().await;

    let ok = app.request(Method::GET, "/admin/dashboard?days=7", None).await;
    assert_eq!(ok.status(), StatusCode::OK);
    let body = response_json(ok).await;
    assert_eq!(body["data"]["platformMix"][0]["name"], "Users");
    assert!(body["data"]["stats"]["totalOrders"].is_number());

    let bad = app.request(Method::GET, "/admin/dashboard?days=0", None).await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
}
