//! Encrypted payload envelope.
//!
//! Every POST body is a JSON object with a single `data` field holding
//! `base64(nonce || ciphertext || tag)`, sealed with AES-128-GCM and no
//! associated data.

use aes_gcm::{aead::Aead, Aes128Gcm, Nonce};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::crypto::{EnvelopeNonce, NONCE_LEN, TAG_LEN};
use crate::error::{CoreError, Result};

/// The wire body of a POST request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Base64 text of `nonce || ciphertext || tag`.
    pub data: String,
}

impl Envelope {
    /// Seal plaintext under a fresh random nonce.
    pub fn seal(cipher: &Aes128Gcm, plaintext: &[u8]) -> Result<Self> {
        let nonce = EnvelopeNonce::generate()?;
        Self::seal_with_nonce(cipher, &nonce, plaintext)
    }

    /// Seal plaintext under a caller-chosen nonce.
    ///
    /// Only for known-answer tests; production sealing goes through [`Envelope::seal`].
    pub fn seal_with_nonce(
        cipher: &Aes128Gcm,
        nonce: &EnvelopeNonce,
        plaintext: &[u8],
    ) -> Result<Self> {
        let sealed = cipher
            .encrypt(Nonce::from_slice(nonce.as_bytes()), plaintext)
            .map_err(|e| CoreError::EncryptionError(e.to_string()))?;

        let mut buf = Vec::with_capacity(NONCE_LEN + sealed.len());
        buf.extend_from_slice(nonce.as_bytes());
        buf.extend_from_slice(&sealed);

        Ok(Self {
            data: STANDARD.encode(buf),
        })
    }

    /// Open the envelope, returning the plaintext.
    pub fn open(&self, cipher: &Aes128Gcm) -> Result<Vec<u8>> {
        let bytes = STANDARD
            .decode(&self.data)
            .map_err(|e| CoreError::MalformedEnvelope(e.to_string()))?;

        if bytes.len() < NONCE_LEN + TAG_LEN {
            return Err(CoreError::MalformedEnvelope(format!(
                "envelope too short: {} bytes",
                bytes.len()
            )));
        }

        let (nonce, sealed) = bytes.split_at(NONCE_LEN);
        cipher
            .decrypt(Nonce::from_slice(nonce), sealed)
            .map_err(|e| CoreError::DecryptionError(e.to_string()))
    }

    /// The nonce carried at the front of the envelope.
    pub fn nonce(&self) -> Result<EnvelopeNonce> {
        let bytes = STANDARD
            .decode(&self.data)
            .map_err(|e| CoreError::MalformedEnvelope(e.to_string()))?;
        let prefix: [u8; NONCE_LEN] = bytes
            .get(..NONCE_LEN)
            .and_then(|p| p.try_into().ok())
            .ok_or_else(|| CoreError::MalformedEnvelope("missing nonce".into()))?;
        Ok(EnvelopeNonce::from_bytes(prefix))
    }

    /// The exact JSON text sent as the request body and signed.
    ///
    /// Base64 text needs no JSON escaping.
    pub fn to_json(&self) -> String {
        format!(r#"{{"data":"{}"}}"#, self.data)
    }
}
