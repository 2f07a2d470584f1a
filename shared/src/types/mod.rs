//! Core types used throughout the dashboard

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{SharedError, SharedResult};

pub mod batch;
pub mod metrics;
pub mod order;
pub mod worker;

pub use batch::{BatchCaseResult, BatchRunResult};
pub use metrics::MetricsSnapshot;
pub use order::{DrinkType, LoyaltyStatus, Order, OrderStatus};
pub use worker::Worker;

/// Identifies which part of the dashboard emitted a log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    /// Terminal front end and wiring
    Dashboard,
    /// Main resource group timer (queue, workers, metrics, run status)
    Scheduler,
    /// Order history timer
    HistoryPoller,
    /// HTTP access to the backend
    BackendClient,
    /// Operator-entered orders
    OrderSubmitter,
    /// Backend batch simulation runs
    BatchRunner,
    /// Simulation start/stop
    RunControl,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Dashboard => write!(f, "dashboard"),
            Component::Scheduler => write!(f, "scheduler"),
            Component::HistoryPoller => write!(f, "history_poller"),
            Component::BackendClient => write!(f, "backend_client"),
            Component::OrderSubmitter => write!(f, "order_submitter"),
            Component::BatchRunner => write!(f, "batch_runner"),
            Component::RunControl => write!(f, "run_control"),
        }
    }
}

/// Timestamp exactly as the backend sent it
///
/// Kept unparsed so one malformed value only disqualifies the computation
/// that needs it instead of failing the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse as RFC 3339; offset-less values are read as UTC
    pub fn parse(&self) -> SharedResult<DateTime<Utc>> {
        let raw = self.0.trim();
        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Ok(instant.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| SharedError::InvalidTimestamp {
                input: self.0.clone(),
            })
    }

    /// Parsed instant, `None` when the value is not a valid instant
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.parse().ok()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
