//! Service tests for the dashboard

pub mod helpers;
pub mod order_submitter;
pub mod run_control;
