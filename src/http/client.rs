//! Low-level HTTP client — `FocusFlowHttp`.
//!
//! The single choke point for all network calls. Every request runs the same
//! pipeline: rate gate → bearer injection → payload encryption → transmit →
//! payload decryption → 401 refresh-and-retry-once. One method per API
//! endpoint. Internal to the SDK — the high-level client wraps this.

use crate::auth::wire::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, RegisterRequest,
};
use crate::crypto::PayloadCipher;
use crate::domain::ai::wire::{FeedbackRequest, Recommendation};
use crate::domain::graph::wire::{GraphQueryRequest, GraphQueryResponse};
use crate::domain::profile::wire::Profile;
use crate::domain::task::wire::{CreateTaskRequest, Task, UpdateTaskRequest};
use crate::error::HttpError;
use crate::http::rate::{RateGate, RateLimit};
use crate::session::{SessionStore, SessionTokens};

use async_lock::Mutex;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// How a request body travels: encrypted (everything except the login
/// surface) or as plain JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wire {
    Encrypted,
    Plain,
}

/// Low-level HTTP client for the FocusFlow REST API.
pub struct FocusFlowHttp {
    base_url: String,
    client: Client,
    session: Arc<dyn SessionStore>,
    cipher: PayloadCipher,
    /// Shared across clones — the aggregate rate must never exceed the
    /// configured ceiling no matter how many handles exist.
    gate: Arc<RateGate>,
    /// Serializes token refresh so concurrent 401s coalesce into one
    /// refresh call (single-flight).
    refresh_lock: Arc<Mutex<()>>,
}

impl FocusFlowHttp {
    pub(crate) fn new(
        base_url: &str,
        cipher: PayloadCipher,
        session: Arc<dyn SessionStore>,
        rate_limit: RateLimit,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            session,
            cipher,
            gate: Arc::new(RateGate::new(rate_limit)),
            refresh_lock: Arc::new(Mutex::new(())),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    /// Login is the one call whose body crosses the wire in plain JSON —
    /// the client has no session yet.
    pub async fn login(&self, body: &LoginRequest) -> Result<LoginResponse, HttpError> {
        self.send(Method::POST, "/auth/login", Some(body), Wire::Plain)
            .await
    }

    pub async fn register(&self, body: &RegisterRequest) -> Result<LoginResponse, HttpError> {
        self.send(Method::POST, "/auth/register", Some(body), Wire::Encrypted)
            .await
    }

    pub async fn logout(&self) -> Result<serde_json::Value, HttpError> {
        self.send(
            Method::POST,
            "/auth/logout",
            Some(&serde_json::json!({})),
            Wire::Encrypted,
        )
        .await
    }

    // ── Tasks ────────────────────────────────────────────────────────────

    pub async fn get_tasks(&self) -> Result<Vec<Task>, HttpError> {
        self.send(Method::GET, "/tasks", None::<&()>, Wire::Encrypted)
            .await
    }

    pub async fn create_task(&self, body: &CreateTaskRequest) -> Result<Task, HttpError> {
        self.send(Method::POST, "/tasks", Some(body), Wire::Encrypted)
            .await
    }

    pub async fn update_task(&self, id: u64, body: &UpdateTaskRequest) -> Result<Task, HttpError> {
        self.send(
            Method::PUT,
            &format!("/tasks/{id}"),
            Some(body),
            Wire::Encrypted,
        )
        .await
    }

    pub async fn delete_task(&self, id: u64) -> Result<serde_json::Value, HttpError> {
        self.send(
            Method::DELETE,
            &format!("/tasks/{id}"),
            None::<&()>,
            Wire::Encrypted,
        )
        .await
    }

    // ── Profile ──────────────────────────────────────────────────────────

    pub async fn get_profile(&self) -> Result<Profile, HttpError> {
        self.send(Method::GET, "/profile", None::<&()>, Wire::Encrypted)
            .await
    }

    pub async fn update_profile(&self, body: &Profile) -> Result<Profile, HttpError> {
        self.send(Method::PUT, "/profile", Some(body), Wire::Encrypted)
            .await
    }

    // ── AI ───────────────────────────────────────────────────────────────

    pub async fn get_recommendations(&self) -> Result<Vec<Recommendation>, HttpError> {
        self.send(
            Method::GET,
            "/ai/recommendations",
            None::<&()>,
            Wire::Encrypted,
        )
        .await
    }

    pub async fn submit_feedback(
        &self,
        body: &FeedbackRequest,
    ) -> Result<serde_json::Value, HttpError> {
        self.send(Method::POST, "/ai/feedback", Some(body), Wire::Encrypted)
            .await
    }

    pub async fn get_insights(&self) -> Result<serde_json::Value, HttpError> {
        self.send(Method::GET, "/ai/insights", None::<&()>, Wire::Encrypted)
            .await
    }

    // ── Graph ────────────────────────────────────────────────────────────

    pub async fn graph_query(
        &self,
        body: &GraphQueryRequest,
    ) -> Result<GraphQueryResponse, HttpError> {
        self.send(Method::POST, "/neo4j/query", Some(body), Wire::Encrypted)
            .await
    }

    // ── Analytics ────────────────────────────────────────────────────────

    pub async fn get_user_analytics(&self) -> Result<serde_json::Value, HttpError> {
        self.send(Method::GET, "/analytics/user", None::<&()>, Wire::Encrypted)
            .await
    }

    pub async fn get_system_analytics(&self) -> Result<serde_json::Value, HttpError> {
        self.send(
            Method::GET,
            "/analytics/system",
            None::<&()>,
            Wire::Encrypted,
        )
        .await
    }

    // ── Pipeline internals ───────────────────────────────────────────────

    async fn send<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        wire: Wire,
    ) -> Result<T, HttpError> {
        let url = format!("{}{}", self.base_url, path);

        match self.perform(&method, &url, body, wire).await {
            Err(HttpError::AuthRequired) => {
                self.refresh_and_retry(&method, &url, body, wire).await
            }
            other => other,
        }
    }

    /// One pass through the pipeline, no 401 handling. A 401 surfaces as
    /// `AuthRequired` for `send` to intercept.
    async fn perform<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &Method,
        url: &str,
        body: Option<&B>,
        wire: Wire,
    ) -> Result<T, HttpError> {
        self.gate.admit().await;

        let mut req = self.client.request(method.clone(), url);

        if let Some(tokens) = self.session.tokens() {
            req = req.bearer_auth(&tokens.auth_token);
        }

        if let Some(b) = body {
            req = match wire {
                Wire::Encrypted => {
                    let plaintext = serde_json::to_vec(b)?;
                    let ciphertext = self.cipher.encrypt(&plaintext)?;
                    req.json(&ciphertext)
                }
                Wire::Plain => req.json(b),
            };
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;

        match status {
            200..=299 => self.decode_body(&text),
            401 => Err(HttpError::AuthRequired),
            _ => Err(api_error(status, &text)),
        }
    }

    /// 401 interception: refresh the session once (single-flight across
    /// concurrent requests) and resend the original request exactly once.
    async fn refresh_and_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &Method,
        url: &str,
        body: Option<&B>,
        wire: Wire,
    ) -> Result<T, HttpError> {
        let stale = match self.session.tokens() {
            Some(t) if !t.refresh_token.is_empty() => t,
            _ => {
                tracing::warn!("401 with no refresh token, clearing session");
                self.session.clear();
                return Err(HttpError::AuthRequired);
            }
        };

        {
            let _guard = self.refresh_lock.lock().await;

            // Re-read after acquiring the lock: another request may have
            // finished a refresh while we waited. Reuse its token.
            match self.session.tokens() {
                Some(current) if current.auth_token != stale.auth_token => {
                    tracing::debug!("reusing token refreshed by a concurrent request");
                }
                Some(current) => {
                    let refreshed = self.refresh_session(&current.refresh_token).await;
                    match refreshed {
                        Ok(resp) => {
                            self.session.set_tokens(SessionTokens::new(
                                resp.token,
                                resp.refresh_token.unwrap_or(current.refresh_token),
                            ));
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "token refresh failed, clearing session");
                            self.session.clear();
                            return Err(HttpError::AuthRequired);
                        }
                    }
                }
                None => {
                    // A concurrent refresh failed and cleared the session.
                    return Err(HttpError::AuthRequired);
                }
            }
        }

        tracing::debug!(url, "retrying request with refreshed token");
        match self.perform(method, url, body, wire).await {
            Err(HttpError::AuthRequired) => {
                // Second 401 on the resent request. Irrecoverable; never loop.
                self.session.clear();
                Err(HttpError::AuthRequired)
            }
            other => other,
        }
    }

    /// Exchange the refresh token for a new auth token. Raw call: no rate
    /// gate, no bearer, no encryption, no 401 interception.
    async fn refresh_session(&self, refresh_token: &str) -> Result<RefreshResponse, HttpError> {
        let url = format!("{}/auth/refresh", self.base_url);
        tracing::debug!("exchanging refresh token for a new auth token");

        let resp = self
            .client
            .post(&url)
            .json(&RefreshRequest {
                refresh_token: refresh_token.to_string(),
            })
            .send()
            .await?;

        let status = resp.status().as_u16();
        let text = resp.text().await?;
        match status {
            200..=299 => Ok(serde_json::from_str(&text)?),
            _ => Err(api_error(status, &text)),
        }
    }

    /// Response bodies arrive either as a JSON string (ciphertext, decrypt
    /// and parse the plaintext) or as structured JSON (pass through).
    fn decode_body<T: DeserializeOwned>(&self, text: &str) -> Result<T, HttpError> {
        if text.is_empty() {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }

        let value: serde_json::Value = serde_json::from_str(text)?;
        match value {
            serde_json::Value::String(ciphertext) => {
                let plaintext = self.cipher.decrypt(&ciphertext)?;
                Ok(serde_json::from_slice(&plaintext)?)
            }
            other => Ok(serde_json::from_value(other)?),
        }
    }
}

/// Build an `Api` error, preferring the server's JSON `message` field.
fn api_error(status: u16, body: &str) -> HttpError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| body.to_string());
    HttpError::Api { status, message }
}

impl Clone for FocusFlowHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            session: self.session.clone(),
            cipher: self.cipher.clone(),
            gate: self.gate.clone(),
            refresh_lock: self.refresh_lock.clone(),
        }
    }
}
