//! Request and response bodies exchanged with the ordering backend
//!
//! - `orders`: manual order creation
//! - `simulation`: run status and start/stop acknowledgements

pub mod orders;
pub mod simulation;

pub use orders::NewOrderRequest;
pub use simulation::{RunStatus, SimulationAck};
