//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-pipeline errors.
///
/// `AuthRequired` always leaves the session store cleared, so callers can
/// redirect straight to login without inspecting anything else.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Transport failed (DNS, connect, TLS, timeout). Never retried.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server rejected the request with a non-2xx, non-401 status.
    /// `message` is the JSON `message` field when present, else the raw body.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Session is invalid or expired and could not be refreshed.
    #[error("Authentication required")]
    AuthRequired,

    #[error("Payload crypto failed: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Payload encryption/decryption errors.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Encryption failed")]
    Encrypt,

    #[error("Decryption failed")]
    Decrypt,

    #[error("Ciphertext is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("Ciphertext too short")]
    Truncated,
}

/// Client configuration errors — surfaced by the builder, before any
/// request is made.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No payload encryption key was configured. There is no built-in
    /// default key; construction fails instead.
    #[error("No payload encryption key configured")]
    MissingEncryptionKey,

    #[error("Invalid encryption key: {0}")]
    InvalidKey(String),

    #[error("Invalid rate limit: {0}")]
    InvalidRateLimit(String),
}
