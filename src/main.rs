//! Smart Pack Worker - groups staff taxi bookings into shared routes
//!
//! This worker connects to NATS and answers Smart Pack planning requests.
//! The same pipeline can be run offline with the `plan` subcommand.

mod cli;
mod config;
mod defaults;
mod handlers;
mod services;
mod types;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, error, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::cli::{Cli, Command};
use crate::services::smart_pack::RoutePlanner;
use crate::types::{BookingRecord, SmartPackRequest};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Serve);

    let _guard = init_logging(command.persists_logs());

    // Load configuration
    let config = config::Config::from_env()?;
    let clusters = config.load_zone_clusters()?;
    let planner = Arc::new(RoutePlanner::new(clusters, config.hub));
    info!(
        "Loaded {} zone clusters ({} aliases), hub at {}, {}",
        planner.clusters().len(),
        planner.clusters().alias_count(),
        planner.hub().lat,
        planner.hub().lng
    );

    match command {
        Command::Serve => serve(&config, planner).await,
        Command::Plan { input, direction, date } => {
            let raw = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let bookings: Vec<BookingRecord> = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse bookings in {}", input.display()))?;

            let response = planner.plan(&SmartPackRequest { direction, date, bookings });
            if response.skipped_stops > 0 {
                warn!("Skipped {} stops without a shift date or time", response.skipped_stops);
            }
            info!("Planned {} route groups from {} stops", response.groups.len(), response.total_stops);

            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Command::CheckClusters => {
            for cluster in planner.clusters().clusters() {
                println!("{} ({} zones)", cluster.label, cluster.members.len());
            }
            info!("Zone cluster configuration is valid");
            Ok(())
        }
    }
}

/// Logs go to stderr (stdout is reserved for `plan` output); the server
/// also writes a daily rolling file.
fn init_logging(persist: bool) -> Option<WorkerGuard> {
    let (file_layer, guard) = if persist {
        // Logs directory - use LOGS_DIR env var or default to ../logs (relative to worker)
        let logs_dir = std::env::var("LOGS_DIR")
            .unwrap_or_else(|_| "../logs".to_string());
        std::fs::create_dir_all(&logs_dir).ok();

        // File appender for persistent logs (daily rotation)
        let file_appender = RollingFileAppender::new(
            Rotation::DAILY,
            &logs_dir,
            "worker.log",
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let layer = tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,smartpack_worker=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}

async fn serve(config: &config::Config, planner: Arc<RoutePlanner>) -> Result<()> {
    info!("Starting Smart Pack Worker...");

    // Connect to NATS (supports optional NATS_USER/NATS_PASSWORD auth).
    let nats_client = match (std::env::var("NATS_USER"), std::env::var("NATS_PASSWORD")) {
        (Ok(user), Ok(password)) if !user.is_empty() => {
            async_nats::ConnectOptions::new()
                .user_and_password(user, password)
                .connect(&config.nats_url)
                .await?
        }
        _ => async_nats::connect(&config.nats_url).await?,
    };
    info!("Connected to NATS at {}", config.nats_url);

    // Start message handlers
    let handler_result = handlers::start_handlers(nats_client, planner).await;

    if let Err(e) = handler_result {
        error!("Handler error: {}", e);
        return Err(e);
    }

    Ok(())
}
