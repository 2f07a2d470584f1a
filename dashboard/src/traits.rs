//! Service trait definitions for dependency injection
//!
//! All backend I/O is abstracted through these traits for testability

use async_trait::async_trait;

use shared::{BatchRunResult, MetricsSnapshot, NewOrderRequest, Order, RunStatus, SimulationAck, Worker};
use crate::error::DashboardResult;

/// Access to the ordering backend's JSON-over-HTTP contract
#[mockall::automock]
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Waiting queue, in backend priority order
    async fn fetch_queue(&self) -> DashboardResult<Vec<Order>>;

    /// Worker status
    async fn fetch_workers(&self) -> DashboardResult<Vec<Worker>>;

    /// Aggregate metrics
    async fn fetch_metrics(&self) -> DashboardResult<MetricsSnapshot>;

    /// Whether the backend simulation is running
    async fn fetch_run_status(&self) -> DashboardResult<RunStatus>;

    /// Full order history
    async fn fetch_order_history(&self) -> DashboardResult<Vec<Order>>;

    /// Start the backend simulation
    async fn start_run(&self) -> DashboardResult<SimulationAck>;

    /// Stop the backend simulation
    async fn stop_run(&self) -> DashboardResult<SimulationAck>;

    /// Run a batch simulation; resolves once the whole batch is done
    async fn run_batch_test(&self) -> DashboardResult<BatchRunResult>;

    /// Create an operator-entered order
    async fn create_order(&self, request: NewOrderRequest) -> DashboardResult<Order>;
}
