//! Service implementations
//!
//! Everything that talks to the backend or runs on a timer

pub mod backend_client;
pub mod batch_runner;
pub mod order_submitter;
pub mod poller;
pub mod run_control;

#[cfg(test)]
pub(crate) mod tests;

// Re-export service implementations
pub use backend_client::RealBackendClient;
pub use batch_runner::BatchTestInvoker;
pub use order_submitter::{ManualOrderSubmitter, Submitted};
pub use poller::{GroupRefresher, PollingScheduler, RefreshOutcome, fetch_main_snapshot};
pub use run_control::RunControl;
