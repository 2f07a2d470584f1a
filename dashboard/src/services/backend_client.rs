//! HTTP client for the ordering backend
//!
//! Any non-success status, transport problem or body that does not match
//! the contract fails the call. Error bodies are never parsed; the caller
//! sees the call's fixed failure message and the status goes to the log.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use shared::{
    BatchRunResult, Component, MetricsSnapshot, NewOrderRequest, Order, RunStatus, SimulationAck, Worker,
    component_debug, component_warn,
};
use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::traits::BackendClient;
use crate::types::{BackendCall, FailureReason, HttpMethod};

/// Real backend client over reqwest
#[derive(Clone)]
pub struct RealBackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl RealBackendClient {
    pub fn new(config: &DashboardConfig) -> DashboardResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| DashboardError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, call: BackendCall) -> String {
        format!("{}{}", self.base_url, call.path())
    }

    async fn execute<B, T>(&self, call: BackendCall, body: Option<&B>) -> DashboardResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url_for(call);
        let mut request = match call.method() {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        if let Some(body) = body {
            request = request.json(body);
        }

        component_debug!(Component::BackendClient, "➡️ {}", call);

        let response = request
            .send()
            .await
            .map_err(|e| Self::failure(call, FailureReason::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::failure(call, FailureReason::Status(status.as_u16())));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Self::failure(call, FailureReason::Decode(e.to_string())))
    }

    fn failure(call: BackendCall, reason: FailureReason) -> DashboardError {
        component_warn!(Component::BackendClient, "⚠️ {} failed: {}", call, reason);
        DashboardError::backend(call, reason)
    }

    /// Call without a request body
    async fn send<T: DeserializeOwned>(&self, call: BackendCall) -> DashboardResult<T> {
        self.execute::<(), T>(call, None).await
    }
}

#[async_trait]
impl BackendClient for RealBackendClient {
    async fn fetch_queue(&self) -> DashboardResult<Vec<Order>> {
        self.send(BackendCall::FetchQueue).await
    }

    async fn fetch_workers(&self) -> DashboardResult<Vec<Worker>> {
        self.send(BackendCall::FetchWorkers).await
    }

    async fn fetch_metrics(&self) -> DashboardResult<MetricsSnapshot> {
        self.send(BackendCall::FetchMetrics).await
    }

    async fn fetch_run_status(&self) -> DashboardResult<RunStatus> {
        self.send(BackendCall::FetchRunStatus).await
    }

    async fn fetch_order_history(&self) -> DashboardResult<Vec<Order>> {
        self.send(BackendCall::FetchOrderHistory).await
    }

    async fn start_run(&self) -> DashboardResult<SimulationAck> {
        self.send(BackendCall::StartRun).await
    }

    async fn stop_run(&self) -> DashboardResult<SimulationAck> {
        self.send(BackendCall::StopRun).await
    }

    async fn run_batch_test(&self) -> DashboardResult<BatchRunResult> {
        self.send(BackendCall::BatchTest).await
    }

    async fn create_order(&self, request: NewOrderRequest) -> DashboardResult<Order> {
        self.execute(BackendCall::CreateOrder, Some(&request)).await
    }
}
