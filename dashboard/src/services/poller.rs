//! Repeating synchronization of the backend resource groups
//!
//! Two independent timers: the main group (queue, workers, metrics, run
//! status) and the order history. A tick of the main group fans out four
//! calls concurrently and commits only if all four succeed.
//!
//! Stopping clears the timers but does not abort calls already dispatched.
//! Those calls still resolve; their results are dropped by the liveness
//! check in [`GroupRefresher::apply`] instead of reaching the store. Every
//! stop opens a new epoch, so a restart never revives a response dispatched
//! before the stop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use shared::{Component, component_debug, component_info, component_warn};
use crate::config::PollingConfig;
use crate::core::state::{Applied, GroupSnapshot, MainSnapshot, SharedStore, Ticket};
use crate::error::{DashboardError, DashboardResult};
use crate::traits::BackendClient;
use crate::types::SyncGroup;

/// What a single refresh did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Committed,
    Failed(String),
    /// A newer fetch of the same group reported first
    Superseded,
    /// The scheduler was stopped while the calls were in flight
    Discarded,
}

fn component_for(group: SyncGroup) -> Component {
    match group {
        SyncGroup::Main => Component::Scheduler,
        SyncGroup::OrderHistory => Component::HistoryPoller,
    }
}

/// Fetch the four main resources concurrently; succeed only if all do
///
/// On failure the error message joins every failed call's message in call
/// order.
pub async fn fetch_main_snapshot<C>(client: &C) -> DashboardResult<MainSnapshot>
where
    C: BackendClient + ?Sized,
{
    let (queue, workers, metrics, status) = tokio::join!(
        client.fetch_queue(),
        client.fetch_workers(),
        client.fetch_metrics(),
        client.fetch_run_status(),
    );

    let failures: Vec<String> = [
        queue.as_ref().err(),
        workers.as_ref().err(),
        metrics.as_ref().err(),
        status.as_ref().err(),
    ]
    .into_iter()
    .flatten()
    .map(ToString::to_string)
    .collect();

    match (queue, workers, metrics, status) {
        (Ok(queue), Ok(workers), Ok(metrics), Ok(status)) => Ok(MainSnapshot {
            queue,
            workers,
            metrics,
            running: status.running,
        }),
        _ => Err(DashboardError::SyncFailed {
            group: SyncGroup::Main,
            message: failures.join("; "),
        }),
    }
}

/// Performs one fetch-and-commit of a group
///
/// Cloned into every timer tick and every out-of-band resync; all clones
/// share the same liveness flag and epoch.
pub struct GroupRefresher<C: BackendClient + 'static> {
    client: Arc<C>,
    store: SharedStore,
    live: Arc<AtomicBool>,
    epoch: Arc<AtomicU64>,
}

impl<C: BackendClient + 'static> Clone for GroupRefresher<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            store: self.store.clone(),
            live: self.live.clone(),
            epoch: self.epoch.clone(),
        }
    }
}

impl<C: BackendClient + 'static> GroupRefresher<C> {
    pub fn new(client: Arc<C>, store: SharedStore) -> Self {
        Self {
            client,
            store,
            live: Arc::new(AtomicBool::new(true)),
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::SeqCst)
    }

    fn set_live(&self, live: bool) {
        self.live.store(live, Ordering::SeqCst);
    }

    /// Close the current lifecycle; responses dispatched before now are dropped
    fn teardown(&self) {
        self.live.store(false, Ordering::SeqCst);
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    pub async fn refresh(&self, group: SyncGroup) -> RefreshOutcome {
        match group {
            SyncGroup::Main => self.refresh_main().await,
            SyncGroup::OrderHistory => self.refresh_history().await,
        }
    }

    /// One tick of the main group, all-or-nothing
    pub async fn refresh_main(&self) -> RefreshOutcome {
        let epoch = self.epoch();
        let ticket = self.store.write().await.issue_ticket(SyncGroup::Main);
        let outcome = fetch_main_snapshot(self.client.as_ref()).await;
        self.apply(SyncGroup::Main, epoch, ticket, outcome.map(GroupSnapshot::Main))
            .await
    }

    /// One tick of the order history group
    pub async fn refresh_history(&self) -> RefreshOutcome {
        let epoch = self.epoch();
        let ticket = self.store.write().await.issue_ticket(SyncGroup::OrderHistory);
        let outcome = self
            .client
            .fetch_order_history()
            .await
            .map(GroupSnapshot::OrderHistory)
            .map_err(|e| DashboardError::SyncFailed {
                group: SyncGroup::OrderHistory,
                message: e.to_string(),
            });
        self.apply(SyncGroup::OrderHistory, epoch, ticket, outcome).await
    }

    /// Request an immediate main-group fetch outside the regular cadence
    ///
    /// Runs on its own task and follows the same all-or-nothing rule. The
    /// regular timers are not touched.
    pub fn spawn_main_refresh(&self) -> JoinHandle<RefreshOutcome> {
        let refresher = self.clone();
        tokio::spawn(async move { refresher.refresh_main().await })
    }

    async fn apply(
        &self,
        group: SyncGroup,
        epoch: u64,
        ticket: Ticket,
        outcome: DashboardResult<GroupSnapshot>,
    ) -> RefreshOutcome {
        let component = component_for(group);
        let mut store = self.store.write().await;

        if !self.is_live() || self.epoch() != epoch {
            component_debug!(component, "Dropping {} response that resolved after teardown", group);
            return RefreshOutcome::Discarded;
        }

        match outcome {
            Ok(snapshot) => match store.commit(ticket, snapshot) {
                Applied::Yes => {
                    component_debug!(component, "🔄 Committed {} snapshot (ticket {})", group, ticket);
                    RefreshOutcome::Committed
                }
                Applied::Superseded => RefreshOutcome::Superseded,
            },
            Err(e) => {
                let message = e.to_string();
                match store.fail(group, ticket, message.clone()) {
                    Applied::Yes => {
                        component_warn!(component, "⚠️ {} sync failed: {}", group, message);
                        RefreshOutcome::Failed(message)
                    }
                    Applied::Superseded => RefreshOutcome::Superseded,
                }
            }
        }
    }
}

/// Drives the two repeating polling cycles
pub struct PollingScheduler<C: BackendClient + 'static> {
    refresher: GroupRefresher<C>,
    config: PollingConfig,
    timers: Vec<JoinHandle<()>>,
}

impl<C: BackendClient + 'static> PollingScheduler<C> {
    pub fn new(client: Arc<C>, store: SharedStore, config: PollingConfig) -> Self {
        Self {
            refresher: GroupRefresher::new(client, store),
            config,
            timers: Vec::new(),
        }
    }

    /// Handle for out-of-band refreshes sharing this scheduler's liveness
    pub fn refresher(&self) -> GroupRefresher<C> {
        self.refresher.clone()
    }

    pub fn config(&self) -> PollingConfig {
        self.config
    }

    pub fn is_running(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Start both timers; the first tick of each fires immediately
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.refresher.set_live(true);
        self.timers.push(Self::spawn_timer(
            self.refresher.clone(),
            SyncGroup::Main,
            self.config.main_interval,
        ));
        self.timers.push(Self::spawn_timer(
            self.refresher.clone(),
            SyncGroup::OrderHistory,
            self.config.history_interval,
        ));
        component_info!(
            Component::Scheduler,
            "⏱️ Polling started (main every {:?}, history every {:?})",
            self.config.main_interval,
            self.config.history_interval
        );
    }

    /// Clear both timers and stop commits
    ///
    /// Calls already dispatched keep running; their responses are dropped.
    pub fn stop(&mut self) {
        self.refresher.teardown();
        if self.timers.is_empty() {
            return;
        }
        for timer in self.timers.drain(..) {
            timer.abort();
        }
        component_info!(Component::Scheduler, "⏹️ Polling stopped");
    }

    fn spawn_timer(refresher: GroupRefresher<C>, group: SyncGroup, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if !refresher.is_live() {
                    break;
                }
                // Own task per tick so aborting the timer never cancels calls in flight
                let tick = refresher.clone();
                tokio::spawn(async move {
                    tick.refresh(group).await;
                });
            }
        })
    }
}

impl<C: BackendClient + 'static> Drop for PollingScheduler<C> {
    fn drop(&mut self) {
        self.stop();
    }
}
