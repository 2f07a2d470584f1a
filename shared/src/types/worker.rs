//! Worker ("barista") status as reported by the backend

use serde::{Deserialize, Serialize};

use super::Order;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: i64,
    pub name: String,
    pub available: bool,
    pub current_workload_minutes: f64,
    pub workload_ratio: f64,
    /// In service order; `None` when the backend sent null
    #[serde(default)]
    pub current_orders: Option<Vec<Order>>,
}

impl Worker {
    pub fn current_orders(&self) -> &[Order] {
        self.current_orders.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_without_orders() {
        let json = r#"{
            "id": 1,
            "name": "Barista 1",
            "available": true,
            "currentWorkloadMinutes": 0.0,
            "workloadRatio": 0.0,
            "currentOrders": null
        }"#;

        let worker: Worker = serde_json::from_str(json).unwrap();
        assert!(worker.available);
        assert!(worker.current_orders().is_empty());
    }

    #[test]
    fn test_worker_orders_keep_service_order() {
        let json = r#"{
            "id": 2,
            "name": "Barista 2",
            "available": false,
            "currentWorkloadMinutes": 6.5,
            "workloadRatio": 1.25,
            "currentOrders": [
                {"id": 11, "customerName": "A", "drinkType": "LATTE", "loyaltyStatus": "REGULAR",
                 "status": "PREPARING", "arrivalTime": "2024-03-01T10:00:00Z", "prepTimeMinutes": 4},
                {"id": 12, "customerName": "B", "drinkType": "ESPRESSO", "loyaltyStatus": "GOLD",
                 "status": "PREPARING", "arrivalTime": "2024-03-01T10:01:00Z", "prepTimeMinutes": 2,
                 "assignmentReason": "Gold customer boost"}
            ]
        }"#;

        let worker: Worker = serde_json::from_str(json).unwrap();
        let ids: Vec<i64> = worker.current_orders().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![11, 12]);
        assert_eq!(
            worker.current_orders()[1].assignment_reason.as_deref(),
            Some("Gold customer boost")
        );
    }
}
