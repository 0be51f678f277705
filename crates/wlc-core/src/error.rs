//! Error types for the WLC core.

use thiserror::Error;

/// Errors raised while building credentials or sealing and opening envelopes.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing identifier: {0}")]
    MissingIdentifier(&'static str),

    #[error("invalid secret key: {0}")]
    InvalidSecretKey(String),

    #[error("invalid key length: expected 16 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("random source failure: {0}")]
    RandomSource(String),

    #[error("encryption error: {0}")]
    EncryptionError(String),

    #[error("decryption error: {0}")]
    DecryptionError(String),

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),
}

/// Parameter errors detected before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("collections must not be empty")]
    EmptyCollections,

    #[error("verified user report (ct=0) requires pi")]
    MissingPlayerId,

    #[error("guest user report (ct=2) requires di")]
    MissingDeviceId,
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
