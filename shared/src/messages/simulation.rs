//! Simulation control messages

use serde::{Deserialize, Serialize};

/// Body of `GET /simulate/status`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatus {
    pub running: bool,
}

/// Acknowledgement returned by `POST /simulate/start` and `/simulate/stop`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationAck {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
