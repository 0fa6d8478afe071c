//! Outbound HTTP clients
//!
//! Two upstreams: the dialogue runtime's REST webhook (where bridged user
//! messages go) and the messaging widget's conversation API (where the
//! runtime's reply is posted, authenticated with a static bearer secret).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// One reply message from the dialogue runtime
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeReply {
    #[serde(default)]
    pub recipient_id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
struct RuntimeMessage<'a> {
    sender: &'a str,
    message: &'a str,
}

/// Client for the dialogue runtime's REST webhook
#[derive(Clone)]
pub struct RuntimeClient {
    http: reqwest::Client,
    webhook_url: String,
}

impl RuntimeClient {
    pub fn new(http: reqwest::Client, webhook_url: impl Into<String>) -> Self {
        Self {
            http,
            webhook_url: webhook_url.into(),
        }
    }

    /// Sends a user message into the runtime and returns its replies
    pub async fn send_message(
        &self,
        sender: &str,
        message: &str,
    ) -> Result<Vec<RuntimeReply>, ApiError> {
        let replies: Vec<RuntimeReply> = self
            .http
            .post(&self.webhook_url)
            .json(&RuntimeMessage { sender, message })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(replies = replies.len(), "runtime replied");
        Ok(replies)
    }
}

#[derive(Debug, Serialize)]
struct WidgetMessage<'a> {
    text: &'a str,
    sender: &'a str,
    #[serde(rename = "type")]
    message_type: &'a str,
}

/// Client for the messaging widget's conversation API
#[derive(Clone)]
pub struct WidgetClient {
    http: reqwest::Client,
    api_url: String,
    secret: String,
    bot_sender: String,
}

impl WidgetClient {
    pub fn new(
        http: reqwest::Client,
        api_url: impl Into<String>,
        secret: impl Into<String>,
        bot_sender: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            secret: secret.into(),
            bot_sender: bot_sender.into(),
        }
    }

    /// Posts a bot reply into the widget conversation
    pub async fn post_reply(&self, text: &str) -> Result<(), ApiError> {
        let payload = [WidgetMessage {
            text,
            sender: &self.bot_sender,
            message_type: "UserMessage",
        }];

        self.http
            .post(&self.api_url)
            .bearer_auth(&self.secret)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// The pair of upstream clients the bridge uses
#[derive(Clone)]
pub struct BridgeClients {
    pub runtime: RuntimeClient,
    pub widget: WidgetClient,
}

impl BridgeClients {
    /// Builds both clients from configuration with a shared HTTP client
    pub fn from_config(config: &ApiConfig) -> Self {
        let http = reqwest::Client::new();
        Self {
            runtime: RuntimeClient::new(http.clone(), &config.runtime_webhook_url),
            widget: WidgetClient::new(
                http,
                &config.widget_api_url,
                &config.widget_secret,
                &config.widget_bot_sender,
            ),
        }
    }
}
