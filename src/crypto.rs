//! Transparent payload encryption.
//!
//! Uses AES-256-GCM. Key size: 32 bytes. Nonce: 12 bytes (random). Tag: 16
//! bytes.
//!
//! Ciphertext wire format, base64-encoded for transport inside a JSON
//! string body:
//!   [ nonce (12 bytes) | ciphertext + tag ]

use aes_gcm::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{ConfigError, CryptoError};

const NONCE_LEN: usize = 12;

/// A 32-byte symmetric key for payload encryption. Zeroized on drop.
///
/// There is no default key. Construction from configuration is the only way
/// to obtain one, and the client builder fails without it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EncryptionKey([u8; 32]);

impl EncryptionKey {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a key from a 64-character hex string (the form it takes in
    /// environment configuration).
    pub fn from_hex(hex_str: &str) -> Result<Self, ConfigError> {
        let bytes = hex::decode(hex_str.trim())
            .map_err(|e| ConfigError::InvalidKey(format!("not valid hex: {e}")))?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| ConfigError::InvalidKey("key must be exactly 32 bytes".into()))?;
        Ok(Self(arr))
    }
}

impl std::fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EncryptionKey(..)")
    }
}

/// Encrypts and decrypts request/response payloads for the HTTP pipeline.
#[derive(Clone)]
pub struct PayloadCipher {
    key: EncryptionKey,
}

impl PayloadCipher {
    pub fn new(key: EncryptionKey) -> Self {
        Self { key }
    }

    /// Encrypt a serialized payload, prepending a random 12-byte nonce and
    /// returning the base64 wire form.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String, CryptoError> {
        let cipher =
            Aes256Gcm::new_from_slice(&self.key.0).map_err(|_| CryptoError::Encrypt)?;
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        let ciphertext = cipher
            .encrypt(&nonce, plaintext)
            .map_err(|_| CryptoError::Encrypt)?;

        let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(out))
    }

    /// Decrypt base64 wire-format ciphertext (nonce || ciphertext+tag).
    pub fn decrypt(&self, wire: &str) -> Result<Vec<u8>, CryptoError> {
        let data = BASE64.decode(wire.trim())?;
        if data.len() < NONCE_LEN {
            return Err(CryptoError::Truncated);
        }
        let (nonce_bytes, ct) = data.split_at(NONCE_LEN);
        let nonce = Nonce::from_slice(nonce_bytes);

        let cipher =
            Aes256Gcm::new_from_slice(&self.key.0).map_err(|_| CryptoError::Decrypt)?;
        cipher.decrypt(nonce, ct).map_err(|_| CryptoError::Decrypt)
    }
}
