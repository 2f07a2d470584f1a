//! Operations dashboard for a drink-order queue backend
//!
//! Keeps a local mirror of the backend's queue, baristas, metrics, run
//! status and order history in sync by polling, derives per-drink timing
//! analytics from the history, and forwards operator commands (start/stop,
//! batch test, manual order) back to the backend.

pub mod config;
pub mod core;
pub mod dashboard_impl;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::{DashboardConfig, PollingConfig};
pub use dashboard_impl::Dashboard;
pub use error::{DashboardError, DashboardResult};
pub use types::*;

// Re-export trait definitions
pub use traits::BackendClient;

// Re-export service implementations
pub use services::{
    BatchTestInvoker, GroupRefresher, ManualOrderSubmitter, PollingScheduler, RealBackendClient, RefreshOutcome,
    RunControl,
};
