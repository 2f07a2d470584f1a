//! Plain-text panels for the terminal front end

use shared::{BatchRunResult, MetricsSnapshot, Order, Worker};

use crate::core::analytics::OrderAnalytics;
use crate::core::presentation::{
    BATCH_DETAIL_RUNS, StatusFilter, filter_orders, format_count, format_minutes, format_percent,
    format_time, is_urgent, status_label, worker_cell,
};
use crate::core::state::DashboardView;

/// Worker labels shown as columns in batch run details
const BATCH_WORKER_COLUMNS: [&str; 3] = ["Barista 1", "Barista 2", "Barista 3"];

pub fn render_status(running: bool, error: Option<&str>) -> String {
    let mut lines = vec![if running {
        "● Running".to_string()
    } else {
        "○ Stopped".to_string()
    }];
    if let Some(error) = error {
        lines.push(format!("! {error}"));
    }
    lines.join("\n")
}

pub fn render_queue(queue: &[Order]) -> String {
    if queue.is_empty() {
        return "Queue is empty. Start simulation or add a manual order.".to_string();
    }

    let mut lines = vec![
        "Waiting Queue (by priority)".to_string(),
        format!(
            "{:>3}  {:<16} {:<11} {:>4} {:>8} {:>9} {:>8} {:<8} {}",
            "#", "Customer", "Drink", "Prep", "Wait", "Est. Wait", "Priority", "Loyalty", "Assignment Reason"
        ),
    ];
    for (idx, order) in queue.iter().enumerate() {
        let wait = order
            .wait_time_minutes
            .map(|w| format!("{w} min"))
            .unwrap_or_else(|| "-".to_string());
        let estimate = order
            .estimated_wait_minutes
            .map(|w| format!("~{w} min"))
            .unwrap_or_else(|| "-".to_string());
        let priority = order
            .priority_score
            .map(|p| format!("{p:.1}"))
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "{:>3}{} {:<16} {:<11} {:>4} {:>8} {:>9} {:>8} {:<8} {}",
            idx + 1,
            if is_urgent(order) { "!" } else { " " },
            order.customer_name,
            order.drink_type.as_str(),
            order.prep_time_minutes,
            wait,
            estimate,
            priority,
            order.loyalty_status.as_str(),
            order.assignment_reason.as_deref().unwrap_or("-"),
        ));
    }
    lines.join("\n")
}

pub fn render_workers(workers: &[Worker]) -> String {
    if workers.is_empty() {
        return "No baristas loaded. Start simulation to create baristas.".to_string();
    }

    let mut lines = vec!["Barista Status".to_string()];
    for worker in workers {
        lines.push(format!(
            "{} [{}] Workload: {:.1} min | Ratio: {:.2}x",
            worker.name,
            if worker.available { "Free" } else { "Busy" },
            worker.current_workload_minutes,
            worker.workload_ratio,
        ));
        for order in worker.current_orders() {
            lines.push(format!(
                "    {} - {} ({} min)",
                order.customer_name,
                order.drink_type.as_str(),
                order.prep_time_minutes
            ));
            if let Some(reason) = &order.assignment_reason {
                lines.push(format!("      Why: {reason}"));
            }
        }
    }
    lines.join("\n")
}

pub fn render_metrics(metrics: Option<&MetricsSnapshot>) -> String {
    let Some(metrics) = metrics else {
        return "Loading metrics...".to_string();
    };

    [
        "Metrics".to_string(),
        format!("  Avg Wait Time:          {}", format_minutes(metrics.avg_wait_time_minutes.or(Some(0.0)), 1)),
        format!("  Max Wait Time:          {}", format_minutes(metrics.max_wait_time_minutes.or(Some(0.0)), 1)),
        format!("  Timeout Rate (>=10 min): {}", format_percent(metrics.timeout_rate)),
        format!("  Fairness Violations:    {}", format_count(metrics.fairness_violations)),
        format!("  Total Completed:        {}", format_count(metrics.total_orders_completed)),
        format!("  Queue Size:             {}", format_count(metrics.queue_size)),
        format!("  Last updated: {}", format_time(metrics.recorded_at.as_ref())),
    ]
    .join("\n")
}

pub fn render_analytics(analytics: &OrderAnalytics, error: Option<&str>) -> String {
    let mut lines = vec!["Order Analytics".to_string()];
    if let Some(error) = error {
        lines.push(format!("! {error}"));
    }
    lines.push(format!(
        "  Average wait time:  {:.2} min (based on {} completed orders)",
        analytics.avg_wait, analytics.wait_count
    ));
    lines.push(format!(
        "  Average total time: {:.2} min (based on {} completed orders)",
        analytics.avg_total, analytics.total_count
    ));

    if analytics.item_rows.is_empty() {
        lines.push("  No orders available.".to_string());
        return lines.join("\n");
    }

    lines.push(format!("  {:<12} {:>6} {:>10} {:>10}", "Item", "Orders", "Avg wait", "Avg total"));
    for row in &analytics.item_rows {
        lines.push(format!(
            "  {:<12} {:>6} {:>10} {:>10}",
            row.drink,
            row.count,
            format_minutes(row.avg_wait, 2),
            format_minutes(row.avg_total, 2),
        ));
    }
    lines.join("\n")
}

pub fn render_batch(result: &BatchRunResult) -> String {
    let mut lines = vec!["Monte Carlo Test Results".to_string()];
    if let Some(summary) = &result.summary {
        lines.push(format!("  {summary}"));
    }
    lines.push(format!("  Avg Wait: {}", format_minutes(result.avg_wait_time_minutes, 2)));
    lines.push(format!("  Timeout Rate: {}", format_percent(result.avg_timeout_rate)));
    lines.push(format!(
        "  Workload Balance: {}",
        result
            .avg_workload_balance_percentage
            .filter(|p| p.is_finite())
            .map(|p| format!("{p:.1}%"))
            .unwrap_or_else(|| "-".to_string())
    ));
    lines.push(format!("  Alerts to Manager: {}", format_count(result.total_alerts_sent_to_manager)));
    lines.push(format!("  Orders >10 min: {}", format_count(result.total_orders_exceeded10_min)));
    lines.push(format!("  Fairness Violations: {}", format_count(result.total_fairness_violations)));

    if !result.results.is_empty() {
        lines.push(format!("  Per-run details (first {BATCH_DETAIL_RUNS} runs)"));
        for run in result.results.iter().take(BATCH_DETAIL_RUNS) {
            let workers: Vec<String> = BATCH_WORKER_COLUMNS
                .iter()
                .map(|label| format!("{label}: {}", worker_cell(run, label)))
                .collect();
            lines.push(format!(
                "    Run {} | {} | {} | alerts {} | {}",
                run.test_case_index,
                format_minutes(run.avg_wait_time_minutes, 2),
                format_percent(run.timeout_rate),
                format_count(run.alerts_sent_to_manager),
                workers.join(" | "),
            ));
        }
    }
    lines.join("\n")
}

pub fn render_orders(orders: &[Order], filter: StatusFilter) -> String {
    let filtered = filter_orders(orders, filter);
    let mut lines = vec![
        format!("All Orders [{filter}]"),
        format!(
            "{:<16} {:<11} {:>6} {:<10} {:>8} {:>13} {:>10} {}",
            "Customer", "Drink", "Prep", "Status", "Arrival", "Service Start", "Completion", "Barista"
        ),
    ];
    if filtered.is_empty() {
        lines.push("No orders found".to_string());
        return lines.join("\n");
    }
    for order in filtered {
        lines.push(format!(
            "{:<16} {:<11} {:>6} {:<10} {:>8} {:>13} {:>10} {}",
            order.customer_name,
            order.drink_type.as_str(),
            format!("{} min", order.prep_time_minutes),
            status_label(order.status),
            format_time(order.arrival_time.as_ref()),
            format_time(order.assignment_time.as_ref()),
            format_time(order.completion_time.as_ref()),
            order.barista_name.as_deref().unwrap_or("-"),
        ));
    }
    lines.join("\n")
}

/// Every panel of the main view
pub fn render_dashboard(view: &DashboardView) -> String {
    [
        render_status(view.running, view.main_error.as_deref()),
        render_queue(&view.queue),
        render_workers(&view.workers),
        render_metrics(view.metrics.as_ref()),
        render_analytics(&view.analytics, view.orders_error.as_deref()),
    ]
    .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::BatchCaseResult;

    #[test]
    fn test_empty_panels() {
        assert!(render_queue(&[]).starts_with("Queue is empty"));
        assert!(render_workers(&[]).starts_with("No baristas loaded"));
        assert_eq!(render_metrics(None), "Loading metrics...");
        assert!(render_analytics(&OrderAnalytics::default(), None).contains("No orders available."));
    }

    #[test]
    fn test_status_line() {
        assert_eq!(render_status(true, None), "● Running");
        assert_eq!(render_status(false, Some("Failed to fetch queue")), "○ Stopped\n! Failed to fetch queue");
    }

    #[test]
    fn test_metrics_panel_without_rates() {
        let panel = render_metrics(Some(&MetricsSnapshot::default()));
        assert!(panel.contains("Timeout Rate (>=10 min): 0.00%"));
        assert!(!panel.contains("NaN"));
        assert!(panel.contains("Avg Wait Time:          0.0 min"));
    }

    #[test]
    fn test_batch_panel_shows_first_five_runs() {
        let result = BatchRunResult {
            summary: Some("Monte Carlo: 8 runs".to_string()),
            results: (1..=8)
                .map(|i| BatchCaseResult {
                    test_case_index: i,
                    ..BatchCaseResult::default()
                })
                .collect(),
            ..BatchRunResult::default()
        };

        let panel = render_batch(&result);
        assert!(panel.contains("Run 5 |"));
        assert!(!panel.contains("Run 6 |"));
        assert!(panel.contains("Timeout Rate: 0.00%"));
        assert!(!panel.contains("NaN"));
    }
}
