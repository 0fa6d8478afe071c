//! Messaging bridge handler
//!
//! The widget calls back here for every message in the conversation.
//! Only the configured sender's messages are bridged; everything else is
//! dropped without forwarding (logged, not an error - this mirrors the
//! single-member demo setup and is not a security boundary).

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::AppState;

/// The widget's message callback payload
#[derive(Debug, Deserialize)]
pub struct WidgetCallback {
    pub data: WidgetData,
}

#[derive(Debug, Deserialize)]
pub struct WidgetData {
    pub message: WidgetMessage,
}

#[derive(Debug, Deserialize)]
pub struct WidgetMessage {
    #[serde(rename = "senderId")]
    pub sender_id: String,
    pub text: String,
}

/// Outcome of one bridge callback
#[derive(Debug, Serialize)]
pub struct BridgeResponse {
    /// Whether the message was forwarded to the runtime
    pub forwarded: bool,
    /// How many replies the runtime produced
    pub replies: usize,
}

/// Forwards an accepted widget message to the runtime and relays the
/// first reply back into the widget conversation
pub async fn forward_message(
    State(state): State<AppState>,
    Json(callback): Json<WidgetCallback>,
) -> Result<Json<BridgeResponse>, ApiError> {
    let message = &callback.data.message;

    if message.sender_id != state.config.allowed_sender {
        info!(sender_id = %message.sender_id, "sender not configured, dropping message");
        return Ok(Json(BridgeResponse {
            forwarded: false,
            replies: 0,
        }));
    }

    let replies = state
        .clients
        .runtime
        .send_message(&message.sender_id, &message.text)
        .await?;

    if let Some(text) = replies.first().and_then(|r| r.text.as_deref()) {
        state.clients.widget.post_reply(text).await?;
    }

    Ok(Json(BridgeResponse {
        forwarded: true,
        replies: replies.len(),
    }))
}
