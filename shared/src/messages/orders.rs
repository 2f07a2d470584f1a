//! Order creation message

use serde::{Deserialize, Serialize};

use crate::types::{DrinkType, LoyaltyStatus};

/// Body of `POST /orders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    pub customer_name: String,
    pub drink_type: DrinkType,
    pub loyalty_status: LoyaltyStatus,
}
