//! Manual order entry form

use shared::{DrinkType, LoyaltyStatus, NewOrderRequest};

/// Operator input for a manual order
///
/// No client-side validation: the backend decides what is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    pub customer_name: String,
    pub drink_type: DrinkType,
    pub loyalty_status: LoyaltyStatus,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            drink_type: DrinkType::Latte,
            loyalty_status: LoyaltyStatus::Regular,
        }
    }
}

impl OrderForm {
    pub fn new(customer_name: impl Into<String>, drink_type: DrinkType, loyalty_status: LoyaltyStatus) -> Self {
        Self {
            customer_name: customer_name.into(),
            drink_type,
            loyalty_status,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn to_request(&self) -> NewOrderRequest {
        NewOrderRequest {
            customer_name: self.customer_name.clone(),
            drink_type: self.drink_type,
            loyalty_status: self.loyalty_status,
        }
    }
}
