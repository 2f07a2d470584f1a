//! Dashboard entry point
//!
//! `watch` (the default) polls the backend and redraws on every change until
//! Ctrl+C. The other subcommands run one operation against the backend and
//! print the result.

use clap::{Parser, Subcommand};
use std::time::Duration;
use tokio::signal;

use dashboard::{
    Dashboard, DashboardConfig, DashboardResult, RealBackendClient, RefreshOutcome,
    core::{
        OrderForm, StatusFilter,
        render::{render_analytics, render_batch, render_dashboard, render_orders, render_queue},
    },
    dashboard_impl::DEFAULT_RENDER_INTERVAL,
};
use shared::{Component, DrinkType, LoyaltyStatus, component_info, logging};

#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(about = "Operations dashboard for the drink-order queue backend")]
struct Args {
    /// Backend base URL (falls back to DASHBOARD_BACKEND_URL, then http://localhost:8080)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Poll interval for queue, baristas, metrics and run status
    #[arg(long, global = true, default_value_t = 3000)]
    poll_interval_ms: u64,

    /// Poll interval for the order history
    #[arg(long, global = true, default_value_t = 3000)]
    history_interval_ms: u64,

    /// Per-request timeout
    #[arg(long, global = true, default_value_t = 10_000)]
    timeout_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Poll continuously and redraw on every change
    Watch,
    /// Submit a manual order
    Order {
        #[arg(long, default_value = "")]
        customer: String,
        #[arg(long, default_value = "latte")]
        drink: DrinkType,
        #[arg(long, default_value = "regular")]
        loyalty: LoyaltyStatus,
    },
    /// Run the backend's Monte Carlo batch test
    BatchTest,
    /// Start the continuous simulation
    Start,
    /// Stop the continuous simulation
    Stop,
    /// Per-drink timing analytics over the order history
    Analytics {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the order history
    Orders {
        /// all, pending, in-service or completed
        #[arg(long, default_value = "all")]
        filter: StatusFilter,
    },
}

#[tokio::main]
async fn main() -> DashboardResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    logging::init_tracing_with_level(Some(&args.log_level));

    let backend_url = DashboardConfig::resolve_backend_url(args.backend_url.clone());
    let config = DashboardConfig::new(
        &backend_url,
        Duration::from_millis(args.poll_interval_ms),
        Duration::from_millis(args.history_interval_ms),
        Duration::from_millis(args.timeout_ms),
    )?;
    component_info!(Component::Dashboard, "🔗 Backend at {}", config.backend_url);

    let client = RealBackendClient::new(&config)?;
    let mut dashboard = Dashboard::new(client, config.polling);

    let command = args.command.unwrap_or(Command::Watch);
    let result = run_command(&mut dashboard, command).await;

    if let Err(e) = &result {
        logging::log_error(Component::Dashboard, "Command failed", e);
    }
    result
}

async fn run_command(dashboard: &mut Dashboard<RealBackendClient>, command: Command) -> DashboardResult<()> {
    match command {
        Command::Watch => watch(dashboard).await,
        Command::Order {
            customer,
            drink,
            loyalty,
        } => submit_order(dashboard, OrderForm::new(customer, drink, loyalty)).await,
        Command::BatchTest => {
            let result = dashboard.batch().run().await?;
            println!("{}", render_batch(&result));
            Ok(())
        }
        Command::Start => {
            let ack = dashboard.run_control().start().await?;
            println!("{}", ack.message.or(ack.status).unwrap_or_else(|| "Simulation started".to_string()));
            Ok(())
        }
        Command::Stop => {
            let ack = dashboard.run_control().stop().await?;
            println!("{}", ack.message.or(ack.status).unwrap_or_else(|| "Simulation stopped".to_string()));
            Ok(())
        }
        Command::Analytics { json } => {
            dashboard.refresh_all().await;
            let view = dashboard.view().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&view.analytics)?);
            } else {
                println!("{}", render_analytics(&view.analytics, view.orders_error.as_deref()));
            }
            Ok(())
        }
        Command::Orders { filter } => {
            dashboard.refresh_all().await;
            let view = dashboard.view().await;
            if let Some(error) = &view.orders_error {
                eprintln!("! {error}");
            }
            println!("{}", render_orders(&view.orders, filter));
            Ok(())
        }
    }
}

async fn watch(dashboard: &mut Dashboard<RealBackendClient>) -> DashboardResult<()> {
    let shutdown_sender = dashboard.get_shutdown_sender();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                logging::log_shutdown(Component::Dashboard, "Received Ctrl+C signal");
                let _ = shutdown_sender.send(()).await;
            }
            Err(err) => {
                logging::log_error(Component::Dashboard, "Signal handling", &err);
            }
        }
    });

    dashboard
        .run(DEFAULT_RENDER_INTERVAL, |view| {
            // Clear screen and home the cursor before each redraw
            print!("\x1B[2J\x1B[H");
            println!("{}", render_dashboard(view));
        })
        .await?;

    logging::log_success(Component::Dashboard, "Dashboard stopped gracefully");
    Ok(())
}

async fn submit_order(dashboard: &Dashboard<RealBackendClient>, form: OrderForm) -> DashboardResult<()> {
    let submitted = dashboard.submit_order(form).await?;
    println!(
        "Created order #{} for '{}' ({})",
        submitted.order.id, submitted.order.customer_name, submitted.order.drink_type
    );

    if let Ok(RefreshOutcome::Committed) = submitted.resync.await {
        println!("\n{}", render_queue(&dashboard.view().await.queue));
    }
    Ok(())
}
