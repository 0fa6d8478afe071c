//! Memberline API Server Binary
//!
//! Starts the HTTP server hosting the action-server webhook and the
//! messaging bridge.
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_DATABASE_URL` / `DATABASE_URL` - PostgreSQL connection string
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error
//! * `API_RUNTIME_WEBHOOK_URL` - The dialogue runtime's REST webhook
//! * `API_WIDGET_API_URL` - The messaging widget's messages endpoint
//! * `API_WIDGET_SECRET` - Bearer secret for the widget API
//! * `API_WIDGET_BOT_SENDER` - Sender ID the bot replies under
//! * `API_ALLOWED_SENDER` - The only widget sender that is bridged

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dialogue_actions::actions::build_registry;
use domain_claims::ClaimLedger;
use domain_member::AddressBook;
use domain_quote::QuoteService;
use infra_db::{create_pool, ClaimsRepository, DatabaseConfig, MemberRepository, QuoteRepository};
use interface_api::client::BridgeClients;
use interface_api::config::ApiConfig;
use interface_api::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "starting Memberline API server"
    );

    let pool = create_pool(DatabaseConfig::new(&config.database_url)).await?;

    let ledger = ClaimLedger::new(std::sync::Arc::new(ClaimsRepository::new(pool.clone())));
    let address_book = AddressBook::new(std::sync::Arc::new(MemberRepository::new(pool.clone())));
    let quotes = QuoteService::new(std::sync::Arc::new(QuoteRepository::new(pool.clone())));

    let state = AppState {
        registry: build_registry(ledger, address_book, quotes),
        clients: BridgeClients::from_config(&config),
        config: config.clone(),
        pool: Some(pool),
    };

    let app = create_router(state);
    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, "server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables, falling back to
/// per-variable defaults
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| {
        let defaults = ApiConfig::default();
        ApiConfig {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            database_url: std::env::var("DATABASE_URL")
                .or_else(|_| std::env::var("API_DATABASE_URL"))
                .unwrap_or(defaults.database_url),
            log_level: std::env::var("API_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            runtime_webhook_url: std::env::var("API_RUNTIME_WEBHOOK_URL")
                .unwrap_or(defaults.runtime_webhook_url),
            widget_api_url: std::env::var("API_WIDGET_API_URL").unwrap_or(defaults.widget_api_url),
            widget_secret: std::env::var("API_WIDGET_SECRET").unwrap_or(defaults.widget_secret),
            widget_bot_sender: std::env::var("API_WIDGET_BOT_SENDER")
                .unwrap_or(defaults.widget_bot_sender),
            allowed_sender: std::env::var("API_ALLOWED_SENDER").unwrap_or(defaults.allowed_sender),
        }
    })
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, initiating graceful shutdown");
        }
    }
}
