//! Test helpers for dashboard integration tests

use serde_json::Value;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dashboard::{Dashboard, DashboardConfig, RealBackendClient};

pub fn create_test_dashboard(server: &MockServer) -> Dashboard<RealBackendClient> {
    let config = DashboardConfig::new(
        &server.uri(),
        Duration::from_millis(100),
        Duration::from_millis(100),
        Duration::from_secs(2),
    )
    .unwrap();
    Dashboard::new(RealBackendClient::new(&config).unwrap(), config.polling)
}

/// Serve `body` with status 200 for `verb path`
pub async fn mount_json(server: &MockServer, verb: &str, route: &str, body: Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, verb: &str, route: &str, status: u16) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Test helper to wait for async operations
pub async fn wait_for_condition<F, Fut>(mut condition: F, timeout_ms: u64) -> bool
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    let start = std::time::Instant::now();
    let timeout = Duration::from_millis(timeout_ms);

    loop {
        if condition().await {
            return true;
        }

        if start.elapsed() > timeout {
            return false;
        }

        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
