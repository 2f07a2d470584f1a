//! Integration tests for the dashboard
//!
//! Drive the real reqwest client against a mock backend and check what ends
//! up in the synchronized view.

mod helpers;

use serde_json::json;
use wiremock::MockServer;

use dashboard::RefreshOutcome;
use dashboard::core::OrderForm;
use dashboard::core::render::render_metrics;
use fixtures::*;
use helpers::*;
use shared::{DrinkType, LoyaltyStatus};

async fn mount_main_group(server: &MockServer, queue_len: i64) {
    let queue: Vec<_> = (1..=queue_len).map(|id| order_json(id, "LATTE", "QUEUED")).collect();
    mount_json(server, "GET", "/queue", json!(queue)).await;
    mount_json(server, "GET", "/baristas", json!([worker_json(1), worker_json(2), worker_json(3)])).await;
    mount_json(server, "GET", "/metrics", metrics_json(queue_len as u64)).await;
    mount_json(server, "GET", "/simulate/status", json!({"running": true})).await;
}

#[tokio::test]
async fn test_partial_failure_then_recovery() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/queue", json!([order_json(1, "LATTE", "QUEUED")])).await;
    mount_status(&server, "GET", "/baristas", 500).await;
    mount_json(&server, "GET", "/metrics", metrics_json(1)).await;
    mount_json(&server, "GET", "/simulate/status", json!({"running": true})).await;
    mount_json(&server, "GET", "/orders/all", json!([])).await;
    let dashboard = create_test_dashboard(&server);

    let (main, history) = dashboard.refresh_all().await;

    assert_eq!(main, RefreshOutcome::Failed("Failed to fetch baristas".to_string()));
    assert_eq!(history, RefreshOutcome::Committed);
    let view = dashboard.view().await;
    assert!(view.queue.is_empty());
    assert!(view.metrics.is_none());
    assert!(!view.running);
    assert_eq!(view.main_error.as_deref(), Some("Failed to fetch baristas"));

    server.reset().await;
    mount_main_group(&server, 2).await;
    mount_json(&server, "GET", "/orders/all", json!([])).await;

    let (main, _) = dashboard.refresh_all().await;

    assert_eq!(main, RefreshOutcome::Committed);
    let view = dashboard.view().await;
    assert_eq!(view.queue.len(), 2);
    assert_eq!(view.workers.len(), 3);
    assert!(view.running);
    assert_eq!(view.main_error, None);
}

#[tokio::test]
async fn test_polling_keeps_view_current() {
    let server = MockServer::start().await;
    mount_main_group(&server, 1).await;
    mount_json(&server, "GET", "/orders/all", json!([completed_order_json(1, "MOCHA", 2, 8)])).await;
    let mut dashboard = create_test_dashboard(&server);

    dashboard.start_polling();
    assert!(wait_for_condition(|| async { dashboard.view().await.queue.len() == 1 }, 2000).await);

    server.reset().await;
    mount_main_group(&server, 3).await;
    mount_json(&server, "GET", "/orders/all", json!([completed_order_json(1, "MOCHA", 2, 8)])).await;
    assert!(wait_for_condition(|| async { dashboard.view().await.queue.len() == 3 }, 2000).await);
    dashboard.stop_polling();

    let view = dashboard.view().await;
    assert_eq!(view.analytics.item_rows.len(), 1);
    assert_eq!(view.analytics.item_rows[0].drink, "Mocha");
}

#[tokio::test]
async fn test_manual_order_triggers_resync() {
    let server = MockServer::start().await;
    mount_main_group(&server, 1).await;
    mount_json(&server, "POST", "/orders", order_json(1, "MOCHA", "QUEUED")).await;
    let dashboard = create_test_dashboard(&server);

    let submitted = dashboard
        .submit_order(OrderForm::new("Grace", DrinkType::Mocha, LoyaltyStatus::Gold))
        .await
        .unwrap();

    assert_eq!(submitted.order.id, 1);
    assert_eq!(submitted.resync.await.unwrap(), RefreshOutcome::Committed);
    assert_eq!(dashboard.view().await.queue.len(), 1);
    assert!(dashboard.order_form().await.is_default());
}

#[tokio::test]
async fn test_rejected_order_keeps_form() {
    let server = MockServer::start().await;
    mount_status(&server, "POST", "/orders", 400).await;
    let dashboard = create_test_dashboard(&server);
    let form = OrderForm::new("Grace", DrinkType::Espresso, LoyaltyStatus::Regular);

    let err = dashboard.submit_order(form.clone()).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to create order");
    assert_eq!(dashboard.order_form().await, form);
}

#[tokio::test]
async fn test_history_analytics_ranked_by_count() {
    let server = MockServer::start().await;
    mount_main_group(&server, 0).await;
    mount_json(
        &server,
        "GET",
        "/orders/all",
        json!([
            completed_order_json(1, "LATTE", 2, 6),
            order_json(2, "COLD_BREW", "QUEUED"),
            order_json(3, "COLD_BREW", "PREPARING"),
            completed_order_json(4, "LATTE", 4, 10),
            completed_order_json(5, "COLD_BREW", 1, 2),
        ]),
    )
    .await;
    let dashboard = create_test_dashboard(&server);

    dashboard.refresh_all().await;

    let analytics = dashboard.view().await.analytics;
    let rows: Vec<(&str, usize)> = analytics.item_rows.iter().map(|r| (r.drink.as_str(), r.count)).collect();
    assert_eq!(rows, vec![("Cold Brew", 3), ("Latte", 2)]);
    assert_eq!(analytics.wait_count, 3);
    assert_eq!(analytics.item_rows[1].avg_wait, Some(3.0));
    assert_eq!(analytics.item_rows[1].avg_total, Some(8.0));
}

#[tokio::test]
async fn test_missing_timeout_rate_renders_zero() {
    let server = MockServer::start().await;
    mount_json(&server, "GET", "/queue", json!([])).await;
    mount_json(&server, "GET", "/baristas", json!([])).await;
    mount_json(&server, "GET", "/metrics", json!({"queueSize": 0})).await;
    mount_json(&server, "GET", "/simulate/status", json!({"running": false})).await;
    mount_json(&server, "GET", "/orders/all", json!([])).await;
    let dashboard = create_test_dashboard(&server);

    dashboard.refresh_all().await;

    let panel = render_metrics(dashboard.view().await.metrics.as_ref());
    assert!(panel.contains("0.00%"));
    assert!(!panel.contains("NaN"));
}
