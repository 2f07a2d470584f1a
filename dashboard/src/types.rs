//! Type definitions for the dashboard
//!
//! Data types and enums shared by services and core logic that are not
//! service traits.

use std::fmt;

/// HTTP verb used by a backend call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Every operation the dashboard performs against the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendCall {
    FetchQueue,
    FetchWorkers,
    FetchMetrics,
    FetchRunStatus,
    FetchOrderHistory,
    StartRun,
    StopRun,
    BatchTest,
    CreateOrder,
}

impl BackendCall {
    pub fn method(&self) -> HttpMethod {
        match self {
            BackendCall::FetchQueue
            | BackendCall::FetchWorkers
            | BackendCall::FetchMetrics
            | BackendCall::FetchRunStatus
            | BackendCall::FetchOrderHistory => HttpMethod::Get,
            BackendCall::StartRun | BackendCall::StopRun | BackendCall::BatchTest | BackendCall::CreateOrder => {
                HttpMethod::Post
            }
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            BackendCall::FetchQueue => "/queue",
            BackendCall::FetchWorkers => "/baristas",
            BackendCall::FetchMetrics => "/metrics",
            BackendCall::FetchRunStatus => "/simulate/status",
            BackendCall::FetchOrderHistory => "/orders/all",
            BackendCall::StartRun => "/simulate/start",
            BackendCall::StopRun => "/simulate/stop",
            BackendCall::BatchTest => "/simulate/test",
            BackendCall::CreateOrder => "/orders",
        }
    }

    /// Fixed message surfaced to the operator when this call fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            BackendCall::FetchQueue => "Failed to fetch queue",
            BackendCall::FetchWorkers => "Failed to fetch baristas",
            BackendCall::FetchMetrics => "Failed to fetch metrics",
            BackendCall::FetchRunStatus => "Failed to fetch status",
            BackendCall::FetchOrderHistory => "Failed to fetch all orders",
            BackendCall::StartRun => "Failed to start simulation",
            BackendCall::StopRun => "Failed to stop simulation",
            BackendCall::BatchTest => "Failed to run test simulation",
            BackendCall::CreateOrder => "Failed to create order",
        }
    }
}

impl fmt::Display for BackendCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.method() {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        };
        write!(f, "{verb} {}", self.path())
    }
}

/// Why a backend call failed; kept for logs, never shown in place of the
/// call-site message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// Connection, timeout or other transport problem
    Transport(String),
    /// Non-success HTTP status
    Status(u16),
    /// Success status but the body did not match the contract
    Decode(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Transport(detail) => write!(f, "transport error: {detail}"),
            FailureReason::Status(code) => write!(f, "HTTP {code}"),
            FailureReason::Decode(detail) => write!(f, "invalid response body: {detail}"),
        }
    }
}

/// Independently synchronized resource groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncGroup {
    /// Queue, workers, metrics and run status; commits all-or-nothing
    Main,
    /// Full order history
    OrderHistory,
}

impl fmt::Display for SyncGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncGroup::Main => write!(f, "main"),
            SyncGroup::OrderHistory => write!(f, "order_history"),
        }
    }
}
