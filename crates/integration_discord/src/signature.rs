//! Interaction request signature verification
//!
//! Discord signs every interaction with the application's Ed25519 key over
//! `timestamp || body`. Requests that fail verification must be rejected.

use ed25519_dalek::{Signature, VerifyingKey};
use tracing::warn;

use crate::error::DiscordError;

/// Header carrying the hex-encoded signature
pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";
/// Header carrying the signed timestamp
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

/// Verifies interaction signatures against the application public key
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    /// Build a verifier from the hex public key shown in the developer portal
    pub fn from_hex(public_key: &str) -> Result<Self, DiscordError> {
        let bytes = hex::decode(public_key.trim())
            .map_err(|e| DiscordError::InvalidPublicKey(e.to_string()))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| DiscordError::InvalidPublicKey("expected 32 bytes".to_string()))?;
        let key = VerifyingKey::from_bytes(&bytes)
            .map_err(|e| DiscordError::InvalidPublicKey(e.to_string()))?;
        Ok(Self { key })
    }

    pub const fn from_key(key: VerifyingKey) -> Self {
        Self { key }
    }

    /// Check a hex signature over `timestamp` followed by `body`
    pub fn verify(&self, timestamp: &str, body: &[u8], signature: &str) -> bool {
        let Ok(bytes) = hex::decode(signature) else {
            warn!("Failed to decode signature hex");
            return false;
        };
        let Ok(signature) = Signature::from_slice(&bytes) else {
            warn!("Invalid signature length");
            return false;
        };

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key.verify_strict(&message, &signature).is_ok()
    }
}
