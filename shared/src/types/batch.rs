//! Results of a backend batch ("Monte Carlo") simulation run
//!
//! Consumed verbatim for display; nothing here is recomputed client-side.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRunResult {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub num_test_cases: Option<u32>,
    #[serde(default)]
    pub orders_per_case: Option<u32>,
    #[serde(default)]
    pub avg_wait_time_minutes: Option<f64>,
    #[serde(default)]
    pub avg_timeout_rate: Option<f64>,
    #[serde(default)]
    pub avg_workload_balance_percentage: Option<f64>,
    #[serde(default)]
    pub total_alerts_sent_to_manager: Option<u64>,
    #[serde(default)]
    pub total_orders_exceeded10_min: Option<u64>,
    #[serde(default)]
    pub total_fairness_violations: Option<u64>,
    #[serde(default)]
    pub target_avg_wait_vs_fifo: Option<String>,
    #[serde(default)]
    pub target_timeout_rate: Option<String>,
    #[serde(default)]
    pub results: Vec<BatchCaseResult>,
}

/// One run of the batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCaseResult {
    pub test_case_index: u32,
    #[serde(default)]
    pub avg_wait_time_minutes: Option<f64>,
    #[serde(default)]
    pub max_wait_time_minutes: Option<f64>,
    #[serde(default)]
    pub timeout_rate: Option<f64>,
    #[serde(default)]
    pub fairness_violations: Option<u64>,
    #[serde(default)]
    pub emergency_boosts_applied: Option<u64>,
    #[serde(default)]
    pub alerts_sent_to_manager: Option<u64>,
    #[serde(default)]
    pub orders_exceeded10_min: Option<u64>,
    #[serde(default)]
    pub workload_balance_percentage: Option<f64>,
    #[serde(default)]
    pub total_completed: Option<u64>,
    /// Worker label -> opaque per-worker record
    #[serde(default)]
    pub per_barista: Option<BTreeMap<String, serde_json::Value>>,
}

impl BatchCaseResult {
    pub fn worker_record(&self, label: &str) -> Option<&serde_json::Value> {
        self.per_barista.as_ref().and_then(|records| records.get(label))
    }
}
