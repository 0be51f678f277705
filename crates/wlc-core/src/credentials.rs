//! The credential context shared by every request.

use aes_gcm::{aead::KeyInit, Aes128Gcm};
use std::fmt;

use crate::canonical;
use crate::crypto::{EnvelopeNonce, KEY_LEN};
use crate::envelope::Envelope;
use crate::error::{CoreError, Result};

/// Application id, business id and shared secret, plus the AES-128-GCM
/// cipher keyed by that secret.
///
/// Built once at startup and never mutated afterwards. Cloning is cheap
/// enough to hand a copy to each client, and `&Credentials` can be shared
/// freely across threads.
#[derive(Clone)]
pub struct Credentials {
    app_id: String,
    biz_id: String,
    secret_key: String,
    cipher: Aes128Gcm,
}

impl Credentials {
    /// Build credentials from the identifiers issued by the service.
    ///
    /// `secret_key` is hex text that must decode to exactly 16 bytes. The
    /// same text (not the decoded bytes) prefixes every signature string.
    pub fn new(
        app_id: impl Into<String>,
        biz_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self> {
        let app_id = app_id.into();
        let biz_id = biz_id.into();
        let secret_key = secret_key.into();

        if app_id.is_empty() {
            return Err(CoreError::MissingIdentifier("appId"));
        }
        if biz_id.is_empty() {
            return Err(CoreError::MissingIdentifier("bizId"));
        }

        let key = hex::decode(&secret_key).map_err(|e| CoreError::InvalidSecretKey(e.to_string()))?;
        if key.len() != KEY_LEN {
            return Err(CoreError::InvalidKeyLength(key.len()));
        }

        let cipher =
            Aes128Gcm::new_from_slice(&key).map_err(|e| CoreError::InvalidSecretKey(e.to_string()))?;

        Ok(Self {
            app_id,
            biz_id,
            secret_key,
            cipher,
        })
    }

    /// The application id (`appId` header).
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// The business id (`bizId` header).
    pub fn biz_id(&self) -> &str {
        &self.biz_id
    }

    /// The hex secret as configured.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Encrypt a payload into an envelope under a fresh nonce.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Envelope> {
        Envelope::seal(&self.cipher, plaintext)
    }

    /// Encrypt under a caller-chosen nonce. Only for known-answer tests;
    /// reusing a nonce under one key breaks GCM.
    pub fn seal_with_nonce(&self, nonce: &EnvelopeNonce, plaintext: &[u8]) -> Result<Envelope> {
        Envelope::seal_with_nonce(&self.cipher, nonce, plaintext)
    }

    /// Encrypt a payload and return the base64 envelope text.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String> {
        Ok(self.seal(plaintext)?.data)
    }

    /// Reverse of [`Credentials::encrypt`].
    pub fn decrypt(&self, envelope_b64: &str) -> Result<Vec<u8>> {
        Envelope {
            data: envelope_b64.to_string(),
        }
        .open(&self.cipher)
    }

    /// Sign headers, query pairs and body with this secret.
    pub fn sign(&self, headers: &[(&str, &str)], query: &[(&str, &str)], body: &str) -> String {
        canonical::sign(&self.secret_key, headers, query, body)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("biz_id", &self.biz_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0f9193177fb67f9b7fc385a0fa7bc4b1";

    #[test]
    fn test_valid_credentials() {
        let creds = Credentials::new("app1", "biz1", SECRET).unwrap();
        assert_eq!(creds.app_id(), "app1");
        assert_eq!(creds.biz_id(), "biz1");
        assert_eq!(creds.secret_key(), SECRET);
    }

    #[test]
    fn test_invalid_hex_rejected() {
        let result = Credentials::new("app1", "biz1", "zz9193177fb67f9b7fc385a0fa7bc4b1");
        assert!(matches!(result, Err(CoreError::InvalidSecretKey(_))));

        let odd = Credentials::new("app1", "biz1", "abc");
        assert!(matches!(odd, Err(CoreError::InvalidSecretKey(_))));
    }

    #[test]
    fn test_wrong_key_length_rejected() {
        // 32 bytes is a valid AES-256 key but not what the protocol uses
        let long = "00".repeat(32);
        assert!(matches!(
            Credentials::new("app1", "biz1", long),
            Err(CoreError::InvalidKeyLength(32))
        ));

        assert!(matches!(
            Credentials::new("app1", "biz1", "0011"),
            Err(CoreError::InvalidKeyLength(2))
        ));

        assert!(matches!(
            Credentials::new("app1", "biz1", ""),
            Err(CoreError::InvalidKeyLength(0))
        ));
    }

    #[test]
    fn test_empty_identifiers_rejected() {
        assert!(matches!(
            Credentials::new("", "biz1", SECRET),
            Err(CoreError::MissingIdentifier("appId"))
        ));
        assert!(matches!(
            Credentials::new("app1", "", SECRET),
            Err(CoreError::MissingIdentifier("bizId"))
        ));
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let creds = Credentials::new("app1", "biz1", SECRET).unwrap();
        let text = creds.encrypt(br#"{"ai":"1"}"#).unwrap();
        assert_eq!(creds.decrypt(&text).unwrap(), br#"{"ai":"1"}"#);
    }

    #[test]
    fn test_decrypt_with_other_secret_fails() {
        let a = Credentials::new("app1", "biz1", SECRET).unwrap();
        let b = Credentials::new("app1", "biz1", "00".repeat(16)).unwrap();
        let text = a.encrypt(b"payload").unwrap();
        assert!(matches!(b.decrypt(&text), Err(CoreError::DecryptionError(_))));
    }

    #[test]
    fn test_known_answer_envelope() {
        // Sealed independently with AES-128-GCM, nonce 00 01 .. 0b.
        let creds = Credentials::new("app1", "biz1", SECRET).unwrap();
        let plaintext = br#"{"ai":"100000000000000001","name":"test","idNum":"110000190101010001"}"#;

        let nonce = EnvelopeNonce::from_bytes([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        let envelope = creds.seal_with_nonce(&nonce, plaintext).unwrap();

        assert_eq!(
            envelope.data,
            "AAECAwQFBgcICQoLxsHdHFgeKc9bVe4ZubZabMeWV6wc9qUAo3Wokb18HWobrHYU1EstRhga7suaGryjo2d59yj8LLl0XK36M3T386W7RP+D8+WxUxR9Xx9f+MN3fJCMuT4="
        );
        assert_eq!(creds.decrypt(&envelope.data).unwrap(), plaintext);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("app1", "biz1", SECRET).unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains(SECRET));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_credentials_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Credentials>();
    }
}
