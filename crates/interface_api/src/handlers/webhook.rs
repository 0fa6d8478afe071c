//! Action-server webhook handlers

use axum::{extract::State, Json};
use serde::Deserialize;

use dialogue_actions::{ActionResponse, Tracker};

use crate::error::ApiError;
use crate::AppState;

/// What the runtime posts for each action invocation
#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    /// Name of the action to run
    pub next_action: String,
    /// Conversation snapshot
    #[serde(default)]
    pub tracker: Tracker,
}

/// Runs one custom action for the runtime
pub async fn run_action(
    State(state): State<AppState>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    let response = state
        .registry
        .dispatch(&request.next_action, &request.tracker)
        .await?;
    Ok(Json(response))
}

/// Lists the registered action names
pub async fn list_actions(State(state): State<AppState>) -> Json<Vec<&'static str>> {
    Json(state.registry.action_names())
}
