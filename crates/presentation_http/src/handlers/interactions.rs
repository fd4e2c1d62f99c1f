//! Discord interactions webhook
//!
//! Verifies the request signature, answers pings and turns application
//! commands into bot commands. With a REST client configured the reply is
//! deferred and delivered by editing the original response; otherwise it is
//! rendered inline.

use axum::{Json, body::Bytes, extract::State, http::HeaderMap};
use domain::BotCommand;
use integration_discord::{
    Interaction, InteractionResponse, InteractionType, MessagePayload, parse_command,
    signature::{SIGNATURE_HEADER, TIMESTAMP_HEADER},
};
use tracing::{Instrument, debug, error, info, info_span, instrument, warn};

use crate::{cooldown::remaining_secs, error::ApiError, state::AppState};

/// Interactions endpoint (POST)
#[instrument(skip(state, headers, body), fields(body_len = body.len()))]
pub async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<InteractionResponse>, ApiError> {
    let Some(verifier) = state.verifier.as_deref() else {
        warn!("Interaction received but no public key is configured");
        return Err(ApiError::ServiceUnavailable(
            "Discord public key not configured".to_string(),
        ));
    };

    let signature = header_str(&headers, SIGNATURE_HEADER);
    let timestamp = header_str(&headers, TIMESTAMP_HEADER);
    let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
        debug!("Missing signature headers");
        return Err(ApiError::Unauthorized("missing request signature".to_string()));
    };

    if !verifier.verify(timestamp, &body, signature) {
        warn!("Interaction signature verification failed");
        return Err(ApiError::Unauthorized("invalid request signature".to_string()));
    }

    let interaction: Interaction = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid interaction payload: {e}")))?;

    match interaction.kind() {
        InteractionType::Ping => {
            debug!("Answering ping");
            Ok(Json(InteractionResponse::pong()))
        },
        InteractionType::ApplicationCommand => Ok(Json(handle_command(&state, interaction).await)),
        InteractionType::Other(kind) => Err(ApiError::BadRequest(format!(
            "Unsupported interaction type {kind}"
        ))),
    }
}

async fn handle_command(state: &AppState, interaction: Interaction) -> InteractionResponse {
    let Some(data) = interaction.data.as_ref() else {
        return InteractionResponse::ephemeral_text("❌ Missing command data.");
    };

    let command = match parse_command(data) {
        Ok(command) => command,
        Err(e) => {
            info!(name = %data.name, error = %e, "Rejected interaction command");
            return InteractionResponse::ephemeral_text(e.user_message());
        },
    };

    if matches!(command, BotCommand::WeatherAlert { .. }) {
        if let Some(user_id) = interaction.user_id() {
            if let Err(remaining) = state.alert_cooldown.try_acquire(user_id) {
                info!(user_id, "Alert command on cooldown");
                return InteractionResponse::ephemeral_text(format!(
                    "⏳ Slow down! You can use this command again in {}s.",
                    remaining_secs(remaining)
                ));
            }
        }
    }

    let ephemeral = matches!(command, BotCommand::QuickWeather { .. });

    if let Some(client) = state.discord.clone() {
        let commands = state.commands.clone();
        let token = interaction.token;
        let span = info_span!("interaction_followup", command = command.name());

        tokio::spawn(
            async move {
                let reply = commands.handle(command).await;
                let payload = MessagePayload::from_reply(&reply);
                if let Err(e) = client.edit_original_response(&token, &payload).await {
                    error!(error = %e, "Failed to deliver interaction reply");
                }
            }
            .instrument(span),
        );

        return InteractionResponse::deferred(ephemeral);
    }

    let reply = state.commands.handle(command).await;
    let payload = MessagePayload::from_reply(&reply);
    InteractionResponse::message(if ephemeral {
        payload.ephemeral()
    } else {
        payload
    })
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
