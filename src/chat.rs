//! Chat runtime client — the conversational backend behind the chat widget.
//!
//! This is a different service with its own credential: an API key sent
//! verbatim in the `Authorization` header (no bearer prefix, no refresh).
//! Requests do not go through the encrypted pipeline and are not rate-gated
//! by it. Kept outside [`FocusFlowClient`](crate::client::FocusFlowClient)
//! because chat session lifetimes belong to the application layer (typically
//! tied to the widget's lifecycle).

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::HttpError;
use crate::network::DEFAULT_CHAT_RUNTIME_URL;

/// A single interaction request sent to the runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatRequest {
    /// Start a new conversation.
    Launch,
    /// Send user text into the running conversation.
    Text { payload: String },
}

impl ChatRequest {
    pub fn text(message: impl Into<String>) -> Self {
        Self::Text {
            payload: message.into(),
        }
    }
}

/// One step of the runtime's reply. The runtime returns a list of these per
/// interaction; shapes vary by trace type, so the payload stays untyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTrace {
    #[serde(rename = "type")]
    pub trace_type: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Client for the conversational runtime.
pub struct ChatRuntime {
    base_url: String,
    api_key: String,
    client: Client,
}

impl ChatRuntime {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(DEFAULT_CHAT_RUNTIME_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Start a conversation for a user.
    pub async fn launch(&self, user_id: &str) -> Result<Vec<ChatTrace>, HttpError> {
        self.interact(user_id, &ChatRequest::Launch).await
    }

    /// Send an interaction and return the runtime's reply traces.
    pub async fn interact(
        &self,
        user_id: &str,
        request: &ChatRequest,
    ) -> Result<Vec<ChatTrace>, HttpError> {
        let url = format!("{}/state/user/{}/interact", self.base_url, user_id);

        let resp = self
            .client
            .post(&url)
            .header("Authorization", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let text = resp.text().await?;
        match status {
            200..=299 => Ok(serde_json::from_str(&text)?),
            _ => Err(HttpError::Api {
                status,
                message: text,
            }),
        }
    }
}
