//! Descriptive statistics over the order history
//!
//! Pure business logic: no I/O, no clock, no shared state. The same input
//! always produces the same output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use shared::{Order, OrderStatus, Timestamp};

const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Per-drink row of the analytics table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRow {
    pub drink: String,
    /// Orders with this label, whatever their status
    pub count: usize,
    /// `None` when no order of this label qualified, never zero
    pub avg_wait: Option<f64>,
    pub avg_total: Option<f64>,
}

/// Result of [`aggregate`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAnalytics {
    /// Sorted by descending count; ties keep first-seen order
    pub item_rows: Vec<ItemRow>,
    /// Mean over all qualifying orders; 0 when there are none
    pub avg_wait: f64,
    pub avg_total: f64,
    pub wait_count: usize,
    pub total_count: usize,
}

/// Running sum for one mean
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

#[derive(Debug, Default)]
struct LabelStats {
    count: usize,
    wait: Accumulator,
    total: Accumulator,
}

/// Display label for a drink wire name: lower-cased, split on `_`, each
/// token capitalized, space-joined (`COLD_BREW` -> `Cold Brew`)
pub fn format_drink_label(raw: &str) -> String {
    raw.to_lowercase()
        .split('_')
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Minutes from `from` to `to`; `None` if either is absent or unparseable.
/// Not clamped: a negative span is reported as such.
fn minutes_between(from: Option<&Timestamp>, to: Option<&Timestamp>) -> Option<f64> {
    let from: DateTime<Utc> = from?.instant()?;
    let to: DateTime<Utc> = to?.instant()?;
    Some((to - from).num_milliseconds() as f64 / MILLIS_PER_MINUTE)
}

/// Wait time: arrival to assignment, COMPLETED orders only
pub fn wait_minutes(order: &Order) -> Option<f64> {
    if order.status != OrderStatus::Completed {
        return None;
    }
    minutes_between(order.arrival_time.as_ref(), order.assignment_time.as_ref())
}

/// Total time: arrival to completion, COMPLETED orders only
pub fn total_minutes(order: &Order) -> Option<f64> {
    if order.status != OrderStatus::Completed {
        return None;
    }
    minutes_between(order.arrival_time.as_ref(), order.completion_time.as_ref())
}

/// Turn an order history snapshot into per-item and global statistics
pub fn aggregate(orders: &[Order]) -> OrderAnalytics {
    let mut labels: Vec<String> = Vec::new();
    let mut stats: HashMap<String, LabelStats> = HashMap::new();
    let mut wait_all = Accumulator::default();
    let mut total_all = Accumulator::default();

    for order in orders {
        let label = format_drink_label(order.drink_type.as_str());
        let entry = stats.entry(label.clone()).or_insert_with(|| {
            labels.push(label);
            LabelStats::default()
        });
        entry.count += 1;

        if let Some(wait) = wait_minutes(order) {
            entry.wait.push(wait);
            wait_all.push(wait);
        }
        if let Some(total) = total_minutes(order) {
            entry.total.push(total);
            total_all.push(total);
        }
    }

    let mut item_rows: Vec<ItemRow> = labels
        .into_iter()
        .filter_map(|label| {
            stats.remove(&label).map(|s| ItemRow {
                drink: label,
                count: s.count,
                avg_wait: s.wait.mean(),
                avg_total: s.total.mean(),
            })
        })
        .collect();
    // sort_by is stable, so equal counts keep first-seen order
    item_rows.sort_by(|a, b| b.count.cmp(&a.count));

    OrderAnalytics {
        item_rows,
        avg_wait: wait_all.mean().unwrap_or(0.0),
        avg_total: total_all.mean().unwrap_or(0.0),
        wait_count: wait_all.count,
        total_count: total_all.count,
    }
}
