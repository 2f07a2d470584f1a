//! Aggregate service metrics computed by the backend

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Every field is optional on the wire; rendering must guard each one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    #[serde(default)]
    pub avg_wait_time_minutes: Option<f64>,
    #[serde(default)]
    pub max_wait_time_minutes: Option<f64>,
    /// Fraction in 0..=1
    #[serde(default)]
    pub timeout_rate: Option<f64>,
    #[serde(default)]
    pub fairness_violations: Option<u64>,
    #[serde(default)]
    pub total_orders_processed: Option<u64>,
    #[serde(default)]
    pub total_orders_completed: Option<u64>,
    #[serde(default)]
    pub queue_size: Option<u64>,
    #[serde(default)]
    pub recorded_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_full_payload() {
        let json = r#"{
            "avgWaitTimeMinutes": 4.8,
            "maxWaitTimeMinutes": 9.5,
            "timeoutRate": 0.023,
            "fairnessViolations": 2,
            "totalOrdersProcessed": 120,
            "totalOrdersCompleted": 117,
            "queueSize": 3,
            "recordedAt": "2024-03-01T10:00:00Z"
        }"#;

        let metrics: MetricsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.timeout_rate, Some(0.023));
        assert_eq!(metrics.queue_size, Some(3));
        assert!(metrics.recorded_at.is_some());
    }

    #[test]
    fn test_metrics_missing_fields_stay_absent() {
        let metrics: MetricsSnapshot = serde_json::from_str(r#"{"queueSize": 0}"#).unwrap();
        assert_eq!(metrics.timeout_rate, None);
        assert_eq!(metrics.avg_wait_time_minutes, None);
        assert_eq!(metrics.queue_size, Some(0));
    }
}
