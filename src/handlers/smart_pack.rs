//! Smart Pack planning message handler

use std::sync::Arc;

use anyhow::Result;
use async_nats::{Client, Subscriber};
use futures::StreamExt;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::services::smart_pack::RoutePlanner;
use crate::types::{ErrorResponse, Request, SmartPackRequest, SuccessResponse};

/// Handle smartpack.plan messages
///
/// Groups the supplied bookings into shareable routes and replies with the
/// sequenced route groups.
pub async fn handle_plan(
    client: Client,
    mut subscriber: Subscriber,
    planner: Arc<RoutePlanner>,
) -> Result<()> {
    while let Some(msg) = subscriber.next().await {
        debug!("Received smartpack.plan message");

        let reply = match msg.reply {
            Some(ref reply) => reply.clone(),
            None => {
                warn!("Message without reply subject");
                continue;
            }
        };

        let body = plan_reply(&planner, &msg.payload)?;
        if let Err(e) = client.publish(reply, body.into()).await {
            warn!("Failed to publish smartpack.plan reply: {}", e);
        }
    }

    Ok(())
}

/// Build the reply body for a smartpack.plan payload
pub fn plan_reply(planner: &RoutePlanner, payload: &[u8]) -> Result<Vec<u8>> {
    let request: Request<SmartPackRequest> = match serde_json::from_slice(payload) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse request: {}", e);
            let error = ErrorResponse::new(Uuid::nil(), "INVALID_REQUEST", e.to_string());
            return Ok(serde_json::to_vec(&error)?);
        }
    };

    let response = planner.plan(&request.payload);

    if response.skipped_stops > 0 {
        warn!(
            "Skipped {} of {} stops without a shift date or time",
            response.skipped_stops, response.total_stops
        );
    }
    info!(
        "Planned {} {} route groups from {} stops",
        response.groups.len(),
        response.direction,
        response.total_stops
    );

    let success = SuccessResponse::new(request.id, response);
    Ok(serde_json::to_vec(&success)?)
}
