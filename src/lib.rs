//! # FocusFlow SDK
//!
//! Rust client SDK for the FocusFlow productivity API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — error taxonomy, network constants
//! 2. **Session & Crypto** — injected session store, payload cipher (AES-256-GCM)
//! 3. **HTTP pipeline** — `FocusFlowHttp`: rate gate → bearer injection →
//!    payload encryption → transmit → payload decryption → 401 single-flight
//!    refresh-and-retry
//! 4. **High-Level Client** — `FocusFlowClient` with nested sub-clients
//! 5. **Chat runtime** — standalone `ChatRuntime` for the conversational backend
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use focusflow_sdk::prelude::*;
//!
//! let client = FocusFlowClient::builder()
//!     .base_url("https://api.focusflow.app/api")
//!     .encryption_key(EncryptionKey::from_hex(&std::env::var("FOCUSFLOW_KEY")?)?)
//!     .build()?;
//!
//! client.auth().login("sam@example.com", "hunter2").await?;
//! let tasks = client.tasks().list().await?;
//! ```
//!
//! Every call except login travels encrypted; expired sessions refresh
//! transparently (once per request, coalesced across concurrent requests).
//! [`HttpError::AuthRequired`](error::HttpError::AuthRequired) means the
//! session is gone and the user must log in again.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Session & Crypto ────────────────────────────────────────────────

/// Session token storage capability.
pub mod session;

/// Transparent payload encryption.
pub mod crypto;

// ── Layer 3: HTTP pipeline ───────────────────────────────────────────────────

/// HTTP client pipeline with rate gate and 401 refresh.
pub mod http;

// ── Layer 4: Domains + Auth ──────────────────────────────────────────────────

/// Authentication: login/register/logout, session lifecycle.
pub mod auth;

/// Domain modules (vertical slices): wire types and sub-clients.
pub mod domain;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `FocusFlowClient` — the primary entry point.
pub mod client;

/// Conversational runtime client (chat widget backend).
pub mod chat;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::ai::{FeedbackKind, Recommendation};
    pub use crate::domain::graph::{GraphQueryRequest, GraphQueryResponse};
    pub use crate::domain::profile::Profile;
    pub use crate::domain::task::{CreateTaskRequest, Task, TaskStatus, UpdateTaskRequest};

    // Auth types
    pub use crate::auth::UserSummary;

    // Session + crypto
    pub use crate::crypto::EncryptionKey;
    pub use crate::session::{MemorySessionStore, SessionStore, SessionTokens};

    // Errors
    pub use crate::error::{ConfigError, HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_CHAT_RUNTIME_URL};

    // Client + sub-clients
    pub use crate::client::{
        AiClient, AnalyticsClient, AuthClient, FocusFlowClient, FocusFlowClientBuilder,
        GraphClient, ProfileSubClient, TasksClient,
    };
    pub use crate::http::RateLimit;

    // Chat runtime
    pub use crate::chat::{ChatRequest, ChatRuntime, ChatTrace};
}
