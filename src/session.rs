//! Session storage — the auth/refresh token pair and where it lives.
//!
//! The pipeline never touches ambient storage. It is handed a
//! [`SessionStore`] capability at construction; frontends back it with
//! whatever persistence they have (browser local storage, a keychain, a
//! dotfile), tests back it with [`MemorySessionStore`].
//!
//! The token pair is created at login, overwritten at refresh, and removed
//! at logout or on irrecoverable auth failure.

use std::sync::Mutex;

/// The credential pair for an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    /// Short-lived bearer token attached to outgoing requests.
    pub auth_token: String,
    /// Long-lived token exchanged for a new auth token on 401.
    pub refresh_token: String,
}

impl SessionTokens {
    pub fn new(auth_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Storage capability for the session token pair.
///
/// Implementations must be safe to share across concurrently in-flight
/// requests; reads and writes of the pair are atomic (no caller ever sees
/// an auth token from one session paired with a refresh token from another).
pub trait SessionStore: Send + Sync {
    /// Current token pair, if a session exists.
    fn tokens(&self) -> Option<SessionTokens>;

    /// Replace the stored pair.
    fn set_tokens(&self, tokens: SessionTokens);

    /// Remove all stored credentials.
    fn clear(&self);
}

/// In-memory session store — the default, and the test double.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<SessionTokens>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with an existing session (e.g. restored from disk).
    pub fn with_tokens(tokens: SessionTokens) -> Self {
        Self {
            inner: Mutex::new(Some(tokens)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn tokens(&self) -> Option<SessionTokens> {
        self.inner.lock().expect("session store poisoned").clone()
    }

    fn set_tokens(&self, tokens: SessionTokens) {
        *self.inner.lock().expect("session store poisoned") = Some(tokens);
    }

    fn clear(&self) {
        *self.inner.lock().expect("session store poisoned") = None;
    }
}
