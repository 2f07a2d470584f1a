//! Shared types for the drink-order operations dashboard
//!
//! Contains the JSON contract consumed from the ordering backend plus the
//! error and logging plumbing used by every component.

pub mod types;
pub mod errors;
pub mod logging;
pub mod messages;

pub use types::*;
pub use errors::*;

// Re-export request/response bodies exchanged with the backend
pub use messages::{
    // Order creation
    NewOrderRequest,

    // Simulation control
    RunStatus, SimulationAck,
};
