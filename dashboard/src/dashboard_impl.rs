//! Main dashboard implementation
//!
//! Owns the state store and wires every service around one backend client.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};

use shared::{Component, component_info, logging};
use crate::config::PollingConfig;
use crate::core::form::OrderForm;
use crate::core::state::{DashboardView, SharedStore, SyncStateStore};
use crate::error::{DashboardError, DashboardResult};
use crate::services::{
    BatchTestInvoker, GroupRefresher, ManualOrderSubmitter, PollingScheduler, RefreshOutcome, RunControl, Submitted,
};
use crate::traits::BackendClient;

/// How often the watch loop checks the store for a new revision
pub const DEFAULT_RENDER_INTERVAL: Duration = Duration::from_millis(250);

/// Dashboard with dependency injection of the backend client
pub struct Dashboard<C: BackendClient + 'static> {
    store: SharedStore,
    scheduler: PollingScheduler<C>,
    submitter: Mutex<ManualOrderSubmitter<C>>,
    batch: Arc<BatchTestInvoker<C>>,
    run_control: RunControl<C>,
    shutdown_tx: mpsc::Sender<()>,
    shutdown_rx: Option<mpsc::Receiver<()>>,
}

impl<C: BackendClient + 'static> Dashboard<C> {
    pub fn new(client: C, polling: PollingConfig) -> Self {
        Self::with_shared_client(Arc::new(client), polling)
    }

    /// Build around a client the caller keeps a handle to
    pub fn with_shared_client(client: Arc<C>, polling: PollingConfig) -> Self {
        let store = SyncStateStore::shared();
        let scheduler = PollingScheduler::new(client.clone(), store.clone(), polling);
        let refresher = scheduler.refresher();
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        Self {
            submitter: Mutex::new(ManualOrderSubmitter::new(client.clone(), refresher.clone())),
            batch: Arc::new(BatchTestInvoker::new(client.clone()).with_refresher(refresher.clone())),
            run_control: RunControl::new(client, refresher),
            store,
            scheduler,
            shutdown_tx,
            shutdown_rx: Some(shutdown_rx),
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Consistent snapshot of everything currently synchronized
    pub async fn view(&self) -> DashboardView {
        self.store.read().await.view()
    }

    pub fn refresher(&self) -> GroupRefresher<C> {
        self.scheduler.refresher()
    }

    /// One fetch of both groups, for one-shot commands
    pub async fn refresh_all(&self) -> (RefreshOutcome, RefreshOutcome) {
        let refresher = self.scheduler.refresher();
        tokio::join!(refresher.refresh_main(), refresher.refresh_history())
    }

    /// Post a manual order; rejected while another submission is in flight
    pub async fn submit_order(&self, form: OrderForm) -> DashboardResult<Submitted> {
        let mut submitter = self
            .submitter
            .try_lock()
            .map_err(|_| DashboardError::SubmissionInProgress)?;
        submitter.set_form(form);
        submitter.submit().await
    }

    /// Current form contents; kept after a failed submission
    pub async fn order_form(&self) -> OrderForm {
        self.submitter.lock().await.form().clone()
    }

    pub fn batch(&self) -> Arc<BatchTestInvoker<C>> {
        self.batch.clone()
    }

    pub fn run_control(&self) -> &RunControl<C> {
        &self.run_control
    }

    pub fn get_shutdown_sender(&self) -> mpsc::Sender<()> {
        self.shutdown_tx.clone()
    }

    pub fn start_polling(&mut self) {
        self.scheduler.start();
    }

    pub fn stop_polling(&mut self) {
        self.scheduler.stop();
    }

    /// Poll until a shutdown signal arrives, calling `on_change` with every
    /// new store revision
    pub async fn run<F>(&mut self, render_interval: Duration, mut on_change: F) -> DashboardResult<()>
    where
        F: FnMut(&DashboardView),
    {
        let mut shutdown_rx = self
            .shutdown_rx
            .take()
            .ok_or_else(|| DashboardError::config("Dashboard is already running"))?;

        logging::log_startup(Component::Dashboard, "polling backend");
        self.scheduler.start();

        let mut ticker = tokio::time::interval(render_interval);
        let mut last_revision = None;
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    component_info!(Component::Dashboard, "Received shutdown signal");
                    break;
                }
                _ = ticker.tick() => {
                    let view = self.view().await;
                    if last_revision != Some(view.revision) {
                        last_revision = Some(view.revision);
                        on_change(&view);
                    }
                }
            }
        }

        self.scheduler.stop();
        self.shutdown_rx = Some(shutdown_rx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tests::fixtures::*;
    use crate::services::tests::helpers::settle;
    use crate::types::BackendCall;
    use assert_matches::assert_matches;
    use shared::{DrinkType, LoyaltyStatus, OrderStatus};

    fn polling(ms: u64) -> PollingConfig {
        PollingConfig {
            main_interval: Duration::from_millis(ms),
            history_interval: Duration::from_millis(ms),
        }
    }

    #[tokio::test]
    async fn test_refresh_all_fills_view() {
        let backend = ScriptedBackend::new();
        backend.set_queue(vec![create_test_order(1, "Ada", DrinkType::Latte, OrderStatus::Queued)]);
        backend.set_history(vec![
            create_completed_order(1, DrinkType::Latte, 2, 6),
            create_completed_order(2, DrinkType::Mocha, 4, 10),
        ]);
        let dashboard = Dashboard::with_shared_client(backend, polling(3000));

        let (main, history) = dashboard.refresh_all().await;

        assert_eq!(main, RefreshOutcome::Committed);
        assert_eq!(history, RefreshOutcome::Committed);
        let view = dashboard.view().await;
        assert_eq!(view.queue.len(), 1);
        assert_eq!(view.analytics.wait_count, 2);
        assert_eq!(view.analytics.avg_wait, 3.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_submission_rejected() {
        let backend = ScriptedBackend::new();
        backend.set_delay(Duration::from_millis(500));
        let dashboard = Dashboard::with_shared_client(backend.clone(), polling(3000));
        let form = OrderForm::new("Grace", DrinkType::Mocha, LoyaltyStatus::Gold);

        let (first, second) = tokio::join!(dashboard.submit_order(form.clone()), async {
            settle().await;
            dashboard.submit_order(form.clone()).await
        });

        assert!(first.is_ok());
        assert_matches!(second, Err(DashboardError::SubmissionInProgress));
        assert_eq!(backend.calls_of(BackendCall::CreateOrder), 1);
        assert!(dashboard.order_form().await.is_default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_renders_each_revision_until_shutdown() {
        let backend = ScriptedBackend::new();
        backend.set_running(true);
        let mut dashboard = Dashboard::with_shared_client(backend.clone(), polling(1000));
        let shutdown = dashboard.get_shutdown_sender();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(2500)).await;
            let _ = shutdown.send(()).await;
        });

        let mut revisions = Vec::new();
        dashboard
            .run(Duration::from_millis(100), |view| revisions.push(view.revision))
            .await
            .unwrap();

        assert!(revisions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(revisions.len() >= 2);
        assert!(dashboard.view().await.running);

        // Polling stopped with the loop
        let calls = backend.calls_of(BackendCall::FetchQueue);
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(backend.calls_of(BackendCall::FetchQueue), calls);
    }
}
