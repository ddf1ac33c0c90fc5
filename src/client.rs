//! High-level client — `FocusFlowClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::auth::client::Auth;
use crate::crypto::{EncryptionKey, PayloadCipher};
use crate::domain::ai::client::Ai;
use crate::domain::analytics::client::Analytics;
use crate::domain::graph::client::Graph;
use crate::domain::profile::client::ProfileClient;
use crate::domain::task::client::Tasks;
use crate::error::{ConfigError, SdkError};
use crate::http::{FocusFlowHttp, RateLimit};
use crate::session::{MemorySessionStore, SessionStore};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::ai::client::Ai as AiClient;
pub use crate::domain::analytics::client::Analytics as AnalyticsClient;
pub use crate::domain::graph::client::Graph as GraphClient;
pub use crate::domain::profile::client::ProfileClient as ProfileSubClient;
pub use crate::domain::task::client::Tasks as TasksClient;

/// The primary entry point for the FocusFlow SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.tasks()`, `client.profile()`, etc. All calls run through the
/// encrypted, rate-gated HTTP pipeline.
pub struct FocusFlowClient {
    pub(crate) http: FocusFlowHttp,
}

impl FocusFlowClient {
    pub fn builder() -> FocusFlowClientBuilder {
        FocusFlowClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn tasks(&self) -> Tasks<'_> {
        Tasks { client: self }
    }

    pub fn profile(&self) -> ProfileClient<'_> {
        ProfileClient { client: self }
    }

    pub fn ai(&self) -> Ai<'_> {
        Ai { client: self }
    }

    pub fn graph(&self) -> Graph<'_> {
        Graph { client: self }
    }

    pub fn analytics(&self) -> Analytics<'_> {
        Analytics { client: self }
    }
}

impl Clone for FocusFlowClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FocusFlowClientBuilder {
    base_url: String,
    encryption_key: Option<EncryptionKey>,
    session_store: Option<Arc<dyn SessionStore>>,
    rate_limit: RateLimit,
    timeout: Duration,
}

impl Default for FocusFlowClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            encryption_key: None,
            session_store: None,
            rate_limit: RateLimit::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl FocusFlowClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// The payload encryption key. Required — `build()` fails without one;
    /// the SDK never falls back to a built-in key.
    pub fn encryption_key(mut self, key: EncryptionKey) -> Self {
        self.encryption_key = Some(key);
        self
    }

    /// Where the session token pair lives. Defaults to a fresh in-memory
    /// store; frontends inject their persistent one.
    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn rate_limit(mut self, max_requests: usize, window: Duration) -> Self {
        self.rate_limit = RateLimit {
            max_requests,
            window,
        };
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<FocusFlowClient, SdkError> {
        let key = self
            .encryption_key
            .ok_or(ConfigError::MissingEncryptionKey)?;

        if self.rate_limit.max_requests == 0 {
            return Err(ConfigError::InvalidRateLimit(
                "max_requests must be at least 1".into(),
            )
            .into());
        }
        if self.rate_limit.window.is_zero() {
            return Err(
                ConfigError::InvalidRateLimit("window must be non-zero".into()).into(),
            );
        }

        let session = self
            .session_store
            .unwrap_or_else(|| Arc::new(MemorySessionStore::new()));

        Ok(FocusFlowClient {
            http: FocusFlowHttp::new(
                &self.base_url,
                PayloadCipher::new(key),
                session,
                self.rate_limit,
                self.timeout,
            ),
        })
    }
}
