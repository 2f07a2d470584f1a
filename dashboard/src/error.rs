//! Dashboard-specific error types

use thiserror::Error;
use shared::SharedError;

use crate::types::{BackendCall, FailureReason, SyncGroup};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// A backend call failed; displays only the fixed call-site message
    #[error("{}", .call.failure_message())]
    Backend { call: BackendCall, reason: FailureReason },

    /// One or more calls of a resource group failed; nothing was committed
    #[error("{message}")]
    SyncFailed { group: SyncGroup, message: String },

    #[error("Batch test already running")]
    BatchAlreadyRunning,

    #[error("Order submission already in progress")]
    SubmissionInProgress,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),
}

impl DashboardError {
    pub fn backend(call: BackendCall, reason: FailureReason) -> Self {
        Self::Backend { call, reason }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// HTTP status of a failed backend call, if one was received
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Backend {
                reason: FailureReason::Status(code),
                ..
            } => Some(*code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
