//! Test helpers for dashboard service tests

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::core::state::SharedStore;
use crate::services::poller::GroupRefresher;
use super::fixtures::ScriptedBackend;

pub fn create_test_refresher(backend: &Arc<ScriptedBackend>, store: &SharedStore) -> GroupRefresher<ScriptedBackend> {
    GroupRefresher::new(backend.clone(), store.clone())
}

/// Test helper to wait for async operations
///
/// Sleeps on the tokio clock, so it also advances paused time.
pub async fn wait_for_condition<F, Fut>(mut condition: F, timeout_ms: u64) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let deadline = tokio::time::Instant::now() + Duration::from_millis(timeout_ms);

    loop {
        if condition().await {
            return true;
        }

        if tokio::time::Instant::now() > deadline {
            return false;
        }

        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Let spawned tasks run without moving the clock
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
