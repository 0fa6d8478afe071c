//! HTTP API Layer
//!
//! This crate exposes two surfaces over Axum:
//!
//! - **Action-server webhook** (`POST /webhook`): the dialogue runtime
//!   posts a conversation snapshot and an action name; the response
//!   carries slot events and message directives.
//! - **Messaging bridge** (`POST /bridge/messages`): the messaging
//!   widget's callback; accepted messages are forwarded to the runtime
//!   and the runtime's reply is posted back to the widget API.
//!
//! Plus `GET /health` and `GET /health/ready` (readiness pings the
//! database when a pool is attached).

pub mod config;
pub mod error;
pub mod client;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use dialogue_actions::ActionRegistry;
use infra_db::DatabasePool;

use crate::client::BridgeClients;
use crate::config::ApiConfig;
use crate::handlers::{bridge, health, webhook};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: ActionRegistry,
    pub clients: BridgeClients,
    pub config: ApiConfig,
    /// Present when serving against PostgreSQL; readiness degrades
    /// gracefully without it (tests run on in-memory stores)
    pub pool: Option<DatabasePool>,
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/webhook", post(webhook::run_action))
        .route("/actions", get(webhook::list_actions))
        .route("/bridge/messages", post(bridge::forward_message))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
