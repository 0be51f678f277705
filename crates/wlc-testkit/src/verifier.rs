//! Receiving-side checks for captured requests.
//!
//! Does what a server holding the same secret would do: recompute the
//! signature from the request's own headers, query and body, then open the
//! envelope of a POST.

use serde::de::DeserializeOwned;
use thiserror::Error;
use wlc_client::{Method, SignedRequest};
use wlc_core::canonical::{keys, SIGNED_HEADERS};
use wlc_core::{CoreError, Credentials, Envelope};

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("no request was captured")]
    NoRequest,

    #[error("missing header: {0}")]
    MissingHeader(&'static str),

    #[error("header {name} is {actual:?}, expected {expected:?}")]
    IdentityMismatch {
        name: &'static str,
        expected: String,
        actual: String,
    },

    #[error("signature mismatch: expected {expected}, got {actual}")]
    SignatureMismatch { expected: String, actual: String },

    #[error("POST request has no body")]
    MissingBody,

    #[error("GET request carries a body")]
    UnexpectedBody,

    #[error("body is not an envelope: {0}")]
    MalformedBody(String),

    #[error("envelope does not open: {0}")]
    Crypto(#[from] CoreError),

    #[error("payload is not the expected JSON: {0}")]
    Payload(#[source] serde_json::Error),
}

fn require<'a>(request: &'a SignedRequest, name: &'static str) -> Result<&'a str, VerifyError> {
    request.header(name).ok_or(VerifyError::MissingHeader(name))
}

/// Verify identity headers and signature; for POST, return the decrypted payload.
pub fn verify_request(
    credentials: &Credentials,
    request: &SignedRequest,
) -> Result<Option<Vec<u8>>, VerifyError> {
    for (name, expected) in [
        (keys::APP_ID, credentials.app_id()),
        (keys::BIZ_ID, credentials.biz_id()),
    ] {
        let actual = require(request, name)?;
        if actual != expected {
            return Err(VerifyError::IdentityMismatch {
                name,
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
    }

    let headers = SIGNED_HEADERS
        .iter()
        .map(|name| Ok((*name, require(request, *name)?)))
        .collect::<Result<Vec<(&str, &str)>, VerifyError>>()?;
    let query: Vec<(&str, &str)> = request
        .query
        .iter()
        .map(|(n, v)| (n.as_str(), v.as_str()))
        .collect();
    let body = request.body.as_deref().unwrap_or("");

    let expected = credentials.sign(&headers, &query, body);
    let actual = require(request, keys::SIGN)?;
    if actual != expected {
        return Err(VerifyError::SignatureMismatch {
            expected,
            actual: actual.to_string(),
        });
    }

    match request.method {
        Method::Get if request.body.is_some() => Err(VerifyError::UnexpectedBody),
        Method::Get => Ok(None),
        Method::Post => {
            let body = request.body.as_deref().ok_or(VerifyError::MissingBody)?;
            let envelope: Envelope =
                serde_json::from_str(body).map_err(|e| VerifyError::MalformedBody(e.to_string()))?;
            Ok(Some(credentials.decrypt(&envelope.data)?))
        }
    }
}

/// Verify a POST and decode its payload.
pub fn decode_payload<T: DeserializeOwned>(
    credentials: &Credentials,
    request: &SignedRequest,
) -> Result<T, VerifyError> {
    let plaintext = verify_request(credentials, request)?.ok_or(VerifyError::MissingBody)?;
    serde_json::from_slice(&plaintext).map_err(VerifyError::Payload)
}
