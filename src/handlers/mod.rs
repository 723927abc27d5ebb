//! NATS message handlers

pub mod ping;
pub mod smart_pack;

use std::sync::Arc;
use anyhow::{anyhow, Result};
use async_nats::Client;
use tracing::{info, error};
use tokio::select;
use tokio::task::JoinError;

use crate::services::smart_pack::RoutePlanner;

/// Start all message handlers
pub async fn start_handlers(client: Client, planner: Arc<RoutePlanner>) -> Result<()> {
    info!("Starting message handlers...");

    // Subscribe to all subjects
    let ping_sub = client.subscribe("smartpack.ping").await?;
    let plan_sub = client.subscribe("smartpack.plan").await?;

    let client_ping = client.clone();
    let ping_handle = tokio::spawn(async move {
        ping::handle_ping(client_ping, ping_sub).await
    });

    let client_plan = client.clone();
    let planner_plan = Arc::clone(&planner);
    let plan_handle = tokio::spawn(async move {
        smart_pack::handle_plan(client_plan, plan_sub, planner_plan).await
    });

    info!("All handlers started, waiting for messages...");

    // Wait for any handler to finish (which means an error occurred)
    let (name, result) = select! {
        result = ping_handle => ("Ping", result),
        result = plan_handle => ("Smart Pack plan", result),
    };
    error!("{} handler finished: {:?}", name, result);

    Err(handler_exit_error(name, result))
}

/// Error for a handler task that stopped; handlers only return when their
/// subscription is gone
fn handler_exit_error(name: &str, result: std::result::Result<Result<()>, JoinError>) -> anyhow::Error {
    match result {
        Ok(Ok(())) => anyhow!("{} handler stopped: subscription closed", name),
        Ok(Err(e)) => e.context(format!("{} handler failed", name)),
        Err(e) => anyhow::Error::new(e).context(format!("{} handler task aborted", name)),
    }
}
