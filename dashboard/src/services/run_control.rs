//! Start and stop of the backend's continuous run

use std::sync::Arc;
use tokio::sync::RwLock;

use shared::{Component, SimulationAck, component_info, component_warn};
use crate::error::DashboardResult;
use crate::services::poller::GroupRefresher;
use crate::traits::BackendClient;
use crate::types::BackendCall;

/// Run status is never set locally; it follows the next main-group commit.
pub struct RunControl<C: BackendClient + 'static> {
    client: Arc<C>,
    refresher: GroupRefresher<C>,
    error: RwLock<Option<String>>,
}

impl<C: BackendClient + 'static> RunControl<C> {
    pub fn new(client: Arc<C>, refresher: GroupRefresher<C>) -> Self {
        Self {
            client,
            refresher,
            error: RwLock::new(None),
        }
    }

    pub async fn start(&self) -> DashboardResult<SimulationAck> {
        let outcome = self.client.start_run().await;
        self.record(BackendCall::StartRun, outcome).await
    }

    pub async fn stop(&self) -> DashboardResult<SimulationAck> {
        let outcome = self.client.stop_run().await;
        self.record(BackendCall::StopRun, outcome).await
    }

    pub async fn last_error(&self) -> Option<String> {
        self.error.read().await.clone()
    }

    async fn record(
        &self,
        call: BackendCall,
        outcome: DashboardResult<SimulationAck>,
    ) -> DashboardResult<SimulationAck> {
        match outcome {
            Ok(ack) => {
                component_info!(
                    Component::RunControl,
                    "▶️ {} acknowledged: {}",
                    call,
                    ack.message.as_deref().or(ack.status.as_deref()).unwrap_or("ok")
                );
                *self.error.write().await = None;
                self.refresher.spawn_main_refresh();
                Ok(ack)
            }
            Err(e) => {
                component_warn!(Component::RunControl, "❌ {}", e);
                *self.error.write().await = Some(e.to_string());
                Err(e)
            }
        }
    }
}
