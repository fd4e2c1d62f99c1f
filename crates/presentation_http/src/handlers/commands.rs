//! Command handlers

use application::Reply;
use axum::{Json, extract::State};
use domain::BotCommand;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Execute a bot command given as JSON and return the rendered reply
#[instrument(skip(state, command), fields(command = command.name()))]
pub async fn execute_command(
    State(state): State<AppState>,
    Json(command): Json<BotCommand>,
) -> Result<Json<Reply>, ApiError> {
    let reply = state.commands.execute(&command).await?;
    Ok(Json(reply))
}
