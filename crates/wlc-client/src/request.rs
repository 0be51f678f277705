//! Request assembly: encode, seal, sign, set headers.

use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use wlc_core::canonical::{keys, CONTENT_TYPE_JSON};
use wlc_core::Credentials;

use crate::error::{ClientError, Result};
use crate::transport::{Method, SignedRequest};

/// Builds signed requests for one set of credentials.
///
/// The `timestamps` header is the current time in milliseconds unless a
/// fixed value is set with [`RequestAssembler::at`].
#[derive(Debug, Clone, Copy)]
pub struct RequestAssembler<'a> {
    credentials: &'a Credentials,
    timestamps: Option<u64>,
}

impl<'a> RequestAssembler<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            credentials,
            timestamps: None,
        }
    }

    /// Use a fixed `timestamps` value (milliseconds since the epoch).
    pub fn at(mut self, millis: u64) -> Self {
        self.timestamps = Some(millis);
        self
    }

    /// JSON-encode `payload`, seal it and sign the envelope text.
    pub fn post<P: Serialize + ?Sized>(&self, url: &str, payload: &P) -> Result<SignedRequest> {
        let plaintext = serde_json::to_vec(payload).map_err(ClientError::Encode)?;
        self.post_raw(url, &plaintext)
    }

    /// Seal already encoded bytes and sign the envelope text.
    pub fn post_raw(&self, url: &str, plaintext: &[u8]) -> Result<SignedRequest> {
        let body = self.credentials.seal(plaintext)?.to_json();
        let headers = self.signed_headers(&[], &body);

        Ok(SignedRequest {
            method: Method::Post,
            url: url.to_string(),
            query: Vec::new(),
            headers,
            body: Some(body),
        })
    }

    /// Sign `query` with an empty body.
    pub fn get(&self, url: &str, query: &[(&str, &str)]) -> SignedRequest {
        let headers = self.signed_headers(query, "");

        SignedRequest {
            method: Method::Get,
            url: url.to_string(),
            query: query
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            headers,
            body: None,
        }
    }

    fn signed_headers(&self, query: &[(&str, &str)], body: &str) -> Vec<(&'static str, String)> {
        let timestamps = self.timestamps.unwrap_or_else(now_millis);

        let mut headers: Vec<(&'static str, String)> = vec![
            (keys::CONTENT_TYPE, CONTENT_TYPE_JSON.to_string()),
            (keys::APP_ID, self.credentials.app_id().to_string()),
            (keys::BIZ_ID, self.credentials.biz_id().to_string()),
            (keys::TIMESTAMPS, timestamps.to_string()),
        ];

        let pairs: Vec<(&str, &str)> = headers.iter().map(|(n, v)| (*n, v.as_str())).collect();
        let sign = self.credentials.sign(&pairs, query, body);

        headers.push((keys::SIGN, sign));
        headers
    }
}

/// Milliseconds since the Unix epoch. A clock set before 1970 yields 0.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
