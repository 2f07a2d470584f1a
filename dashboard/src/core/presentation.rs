//! Display mapping for synchronized data
//!
//! Labels, filters and number formatting shared by every panel. Values are
//! shown as the backend computed them; only missing or non-finite numbers
//! are guarded.

use chrono::Local;
use std::fmt;
use std::str::FromStr;

use shared::{BatchCaseResult, Order, OrderStatus, SharedError, Timestamp};

/// Wait (minutes) at which a queued order is flagged urgent
pub const URGENT_WAIT_MINUTES: i64 = 8;

/// Number of per-run records shown in batch details
pub const BATCH_DETAIL_RUNS: usize = 5;

/// Operator-facing status label; COMPLETED and TIMEOUT both read "Completed"
pub fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Queued => "Pending",
        OrderStatus::Preparing => "In Service",
        OrderStatus::Completed | OrderStatus::Timeout => "Completed",
    }
}

/// Order list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    InService,
    Completed,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::InService,
        StatusFilter::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::InService => "In Service",
            StatusFilter::Completed => "Completed",
        }
    }

    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            other => other.label() == status_label(status),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        StatusFilter::ALL
            .into_iter()
            .find(|filter| filter.label().to_lowercase() == normalized)
            .ok_or_else(|| SharedError::UnknownVariant {
                kind: "status filter",
                input: s.to_string(),
            })
    }
}

pub fn filter_orders(orders: &[Order], filter: StatusFilter) -> Vec<&Order> {
    orders.iter().filter(|order| filter.matches(order.status)).collect()
}

/// Rate (fraction) as a percentage; missing or non-finite reads as 0 and the
/// result is clamped to 0..=100
pub fn rate_percent(rate: Option<f64>) -> f64 {
    match rate {
        Some(r) if r.is_finite() => (r * 100.0).clamp(0.0, 100.0),
        _ => 0.0,
    }
}

pub fn format_percent(rate: Option<f64>) -> String {
    format!("{:.2}%", rate_percent(rate))
}

/// Minutes with fixed precision, "-" when absent
pub fn format_minutes(minutes: Option<f64>, precision: usize) -> String {
    match minutes {
        Some(m) if m.is_finite() => format!("{m:.precision$} min"),
        _ => "-".to_string(),
    }
}

pub fn format_count(count: Option<u64>) -> String {
    count.unwrap_or(0).to_string()
}

/// Local wall-clock time, "-" when absent or unparseable
pub fn format_time(timestamp: Option<&Timestamp>) -> String {
    timestamp
        .and_then(Timestamp::instant)
        .map(|instant| instant.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn is_urgent(order: &Order) -> bool {
    order.wait_time_minutes.is_some_and(|wait| wait >= URGENT_WAIT_MINUTES)
}

/// Per-worker cell of a batch run: compact JSON record or "-"
pub fn worker_cell(run: &BatchCaseResult, label: &str) -> String {
    run.worker_record(label)
        .map(|record| record.to_string())
        .unwrap_or_else(|| "-".to_string())
}
