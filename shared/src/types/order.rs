//! Order entity and its enumerations

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Timestamp;
use crate::errors::SharedError;

/// Drink menu; each drink implies a nominal preparation time
///
/// `Unknown` stands in for a missing or unrecognized drink reported by the
/// backend. It is never offered on the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrinkType {
    ColdBrew,
    Espresso,
    Americano,
    Cappuccino,
    Latte,
    Mocha,
    #[serde(other)]
    Unknown,
}

impl DrinkType {
    pub const ALL: [DrinkType; 6] = [
        DrinkType::ColdBrew,
        DrinkType::Espresso,
        DrinkType::Americano,
        DrinkType::Cappuccino,
        DrinkType::Latte,
        DrinkType::Mocha,
    ];

    /// Wire name, e.g. `COLD_BREW`; `-` when unknown
    pub fn as_str(&self) -> &'static str {
        match self {
            DrinkType::ColdBrew => "COLD_BREW",
            DrinkType::Espresso => "ESPRESSO",
            DrinkType::Americano => "AMERICANO",
            DrinkType::Cappuccino => "CAPPUCCINO",
            DrinkType::Latte => "LATTE",
            DrinkType::Mocha => "MOCHA",
            DrinkType::Unknown => "-",
        }
    }

    /// Nominal preparation time in minutes, shown on the order entry form only
    pub fn nominal_prep_minutes(&self) -> u32 {
        match self {
            DrinkType::ColdBrew => 1,
            DrinkType::Espresso | DrinkType::Americano => 2,
            DrinkType::Cappuccino | DrinkType::Latte => 4,
            DrinkType::Mocha => 6,
            DrinkType::Unknown => 0,
        }
    }

    /// Human label, e.g. `Cold Brew`
    pub fn label(&self) -> &'static str {
        match self {
            DrinkType::ColdBrew => "Cold Brew",
            DrinkType::Espresso => "Espresso",
            DrinkType::Americano => "Americano",
            DrinkType::Cappuccino => "Cappuccino",
            DrinkType::Latte => "Latte",
            DrinkType::Mocha => "Mocha",
            DrinkType::Unknown => "-",
        }
    }

    /// Entry form option text, e.g. `Cold Brew (1 min)`
    pub fn option_label(&self) -> String {
        format!("{} ({} min)", self.label(), self.nominal_prep_minutes())
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrinkType {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        DrinkType::ALL
            .into_iter()
            .find(|drink| drink.as_str() == normalized)
            .ok_or_else(|| SharedError::UnknownVariant {
                kind: "drink type",
                input: s.to_string(),
            })
    }
}

/// Order lifecycle: QUEUED -> PREPARING -> COMPLETED | TIMEOUT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Queued,
    Preparing,
    Completed,
    Timeout,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Queued => "QUEUED",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Timeout => "TIMEOUT",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Timeout)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer tier; only the backend interprets it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoyaltyStatus {
    #[default]
    Regular,
    Gold,
}

impl LoyaltyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoyaltyStatus::Regular => "REGULAR",
            LoyaltyStatus::Gold => "GOLD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoyaltyStatus::Regular => "Regular",
            LoyaltyStatus::Gold => "Gold",
        }
    }
}

impl fmt::Display for LoyaltyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoyaltyStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "REGULAR" => Ok(LoyaltyStatus::Regular),
            "GOLD" => Ok(LoyaltyStatus::Gold),
            _ => Err(SharedError::UnknownVariant {
                kind: "loyalty status",
                input: s.to_string(),
            }),
        }
    }
}

/// A drink order as reported by the backend
///
/// Optional fields stay `Option` rather than defaulting: analytics depend on
/// whether a timestamp is present, not just on its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    #[serde(default = "unknown_drink", deserialize_with = "drink_or_unknown")]
    pub drink_type: DrinkType,
    pub prep_time_minutes: u32,
    pub status: OrderStatus,
    pub arrival_time: Option<Timestamp>,
    #[serde(default)]
    pub assignment_time: Option<Timestamp>,
    #[serde(default)]
    pub completion_time: Option<Timestamp>,
    #[serde(default)]
    pub barista_id: Option<i64>,
    #[serde(default)]
    pub barista_name: Option<String>,
    #[serde(default)]
    pub priority_score: Option<f64>,
    #[serde(default)]
    pub wait_time_minutes: Option<i64>,
    #[serde(default)]
    pub estimated_wait_minutes: Option<i64>,
    pub loyalty_status: LoyaltyStatus,
    #[serde(default)]
    pub assignment_reason: Option<String>,
}

fn unknown_drink() -> DrinkType {
    DrinkType::Unknown
}

/// A null drink degrades to `Unknown` instead of failing the whole payload
fn drink_or_unknown<'de, D>(deserializer: D) -> Result<DrinkType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<DrinkType>::deserialize(deserializer)?.unwrap_or(DrinkType::Unknown))
}
