//! Blocking HTTP transport over `reqwest`.

use reqwest::blocking::Client;
use reqwest::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, TransportError};
use crate::transport::{Method, RawResponse, SignedRequest, Transport};

/// Sends requests with a pooled `reqwest` blocking client.
///
/// The client is built once with the configured timeout and user agent and
/// reused for every call.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self { http })
    }

    /// Wrap an already configured client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &SignedRequest) -> Result<RawResponse, TransportError> {
        let url = build_url(request)?;

        let mut builder = match request.method {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().map_err(classify)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

/// Endpoint URL with the query pairs appended, percent-encoded.
fn build_url(request: &SignedRequest) -> Result<Url, TransportError> {
    let mut url = Url::parse(&request.url)
        .map_err(|e| TransportError::InvalidRequest(format!("{}: {}", request.url, e)))?;
    if !request.query.is_empty() {
        url.query_pairs_mut().extend_pairs(
            request
                .query
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        );
    }
    Ok(url)
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_builder() {
        TransportError::InvalidRequest(err.to_string())
    } else if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Connection(err.to_string())
    }
}
