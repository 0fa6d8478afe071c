//! API configuration

use serde::Deserialize;

/// API configuration
///
/// Loaded from `API_`-prefixed environment variables. The widget secret
/// is a static bearer token for the messaging widget's REST API; the
/// allowed sender is the single conversation participant whose messages
/// are bridged (anything else is dropped, which is a demo convenience and
/// not a security boundary).
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Log level
    pub log_level: String,
    /// The dialogue runtime's REST webhook
    pub runtime_webhook_url: String,
    /// The messaging widget's conversation-messages endpoint
    pub widget_api_url: String,
    /// Bearer secret for the widget API
    pub widget_secret: String,
    /// Sender ID the bot posts widget replies under
    pub widget_bot_sender: String,
    /// The only widget sender whose messages are forwarded
    pub allowed_sender: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/memberline".to_string(),
            log_level: "info".to_string(),
            runtime_webhook_url: "http://localhost:5005/webhooks/rest/webhook".to_string(),
            widget_api_url: "https://chat.example.com/v1/conversations/demo/messages".to_string(),
            widget_secret: "change-me-in-production".to_string(),
            widget_bot_sender: "654321".to_string(),
            allowed_sender: "123456".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
