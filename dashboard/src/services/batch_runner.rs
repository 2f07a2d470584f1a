//! Batch (Monte Carlo) test invocation
//!
//! At most one batch runs at a time. The previous result is cleared when a
//! new run starts and replaced only when it succeeds.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use shared::{BatchCaseResult, BatchRunResult, Component, component_info, component_warn};
use crate::core::presentation::BATCH_DETAIL_RUNS;
use crate::error::{DashboardError, DashboardResult};
use crate::services::poller::GroupRefresher;
use crate::traits::BackendClient;

/// Clears the in-flight flag however the run ends
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct BatchTestInvoker<C: BackendClient + 'static> {
    client: Arc<C>,
    refresher: Option<GroupRefresher<C>>,
    in_flight: AtomicBool,
    result: RwLock<Option<BatchRunResult>>,
    error: RwLock<Option<String>>,
}

impl<C: BackendClient + 'static> BatchTestInvoker<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            refresher: None,
            in_flight: AtomicBool::new(false),
            result: RwLock::new(None),
            error: RwLock::new(None),
        }
    }

    /// Resync the main group after each successful batch
    pub fn with_refresher(mut self, refresher: GroupRefresher<C>) -> Self {
        self.refresher = Some(refresher);
        self
    }

    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub async fn run(&self) -> DashboardResult<BatchRunResult> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(DashboardError::BatchAlreadyRunning);
        }
        let _guard = InFlight(&self.in_flight);

        *self.result.write().await = None;
        *self.error.write().await = None;
        component_info!(Component::BatchRunner, "🎲 Batch test started");

        match self.client.run_batch_test().await {
            Ok(result) => {
                component_info!(
                    Component::BatchRunner,
                    "✅ Batch test finished with {} runs",
                    result.results.len()
                );
                *self.result.write().await = Some(result.clone());
                if let Some(refresher) = &self.refresher {
                    refresher.spawn_main_refresh();
                }
                Ok(result)
            }
            Err(e) => {
                component_warn!(Component::BatchRunner, "❌ {}", e);
                *self.error.write().await = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Full result of the last successful batch
    pub async fn result(&self) -> Option<BatchRunResult> {
        self.result.read().await.clone()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.error.read().await.clone()
    }

    /// The per-run records shown in detail; the full list stays in [`Self::result`]
    pub async fn detail_runs(&self) -> Vec<BatchCaseResult> {
        self.result
            .read()
            .await
            .as_ref()
            .map(|result| result.results.iter().take(BATCH_DETAIL_RUNS).cloned().collect())
            .unwrap_or_default()
    }
}
