//! Shared error types for the dashboard

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Unknown {kind}: {input}")]
    UnknownVariant { kind: &'static str, input: String },

    #[error("Invalid timestamp: {input}")]
    InvalidTimestamp { input: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
