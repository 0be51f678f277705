//! The WLC client and its three operations.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};
use wlc_core::canonical::keys;
use wlc_core::{
    validate_check_request, validate_loginout_request, validate_subject_id, CheckRequest,
    CheckResponse, Credentials, LoginoutRequest, LoginoutResponse, ServiceResponse,
};

use crate::config::{ClientConfig, Endpoints};
use crate::error::{ClientError, Result};
use crate::http::HttpTransport;
use crate::request::RequestAssembler;
use crate::transport::{RawResponse, SignedRequest, Transport};

/// Client for the identity check, query and behavior report operations.
///
/// Each operation is one blocking round trip with no retry. The client holds
/// no mutable state, so it can be shared across threads behind an `Arc`.
pub struct WlcClient<T: Transport = HttpTransport> {
    credentials: Credentials,
    config: ClientConfig,
    transport: T,
}

impl WlcClient<HttpTransport> {
    /// Client with the default configuration (production endpoints).
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> WlcClientBuilder {
        WlcClientBuilder::new(credentials)
    }
}

impl<T: Transport> WlcClient<T> {
    /// Client over an arbitrary transport. `config.timeout` and
    /// `config.user_agent` are up to the transport to honor.
    pub fn with_transport(credentials: Credentials, config: ClientConfig, transport: T) -> Self {
        Self {
            credentials,
            config,
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit an identity for verification.
    pub fn check(&self, request: &CheckRequest) -> Result<CheckResponse> {
        validate_check_request(request)?;
        let raw = self.post(&self.config.endpoints.check, request)?;
        decode("check", raw)
    }

    /// Look up the status of an earlier check by its subject identifier.
    pub fn query(&self, ai: &str) -> Result<CheckResponse> {
        validate_subject_id(ai)?;
        let raw = self.get(&self.config.endpoints.query, &[(keys::AI, ai)])?;
        decode("query", raw)
    }

    /// Report login and logout events.
    ///
    /// Only the first collection entry is checked locally. Problems in later
    /// entries come back per entry in the response.
    pub fn loginout(&self, request: &LoginoutRequest) -> Result<LoginoutResponse> {
        validate_loginout_request(request)?;
        let raw = self.post(&self.config.endpoints.loginout, request)?;
        decode("loginout", raw)
    }

    /// Seal and sign `payload`, POST it to `url`, return the raw response.
    pub fn post<P: Serialize + ?Sized>(&self, url: &str, payload: &P) -> Result<RawResponse> {
        let request = RequestAssembler::new(&self.credentials).post(url, payload)?;
        self.send(&request)
    }

    /// Sign `query`, GET `url` with it, return the raw response.
    pub fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<RawResponse> {
        let request = RequestAssembler::new(&self.credentials).get(url, query);
        self.send(&request)
    }

    fn send(&self, request: &SignedRequest) -> Result<RawResponse> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request)?;
        if !response.is_success() {
            warn!(
                method = %request.method,
                url = %request.url,
                status = response.status,
                "non-success HTTP status"
            );
        }
        Ok(response)
    }
}

impl<T: Transport> std::fmt::Debug for WlcClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WlcClient")
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Decode a response body. Non-zero `errcode` values are returned as data.
fn decode<R>(operation: &'static str, raw: RawResponse) -> Result<R>
where
    R: DeserializeOwned + ServiceResponse,
{
    let response: R = match serde_json::from_slice(&raw.body) {
        Ok(response) => response,
        Err(source) => {
            warn!(operation, status = raw.status, error = %source, "failed to decode response");
            return Err(ClientError::Decode {
                status: raw.status,
                body: raw.body_text().into_owned(),
                source,
            });
        }
    };

    if !response.is_success() {
        debug!(
            operation,
            errcode = response.errcode(),
            errmsg = response.errmsg(),
            "service returned error code"
        );
    }
    Ok(response)
}

/// Builder for [`WlcClient`].
#[derive(Debug)]
pub struct WlcClientBuilder {
    credentials: Credentials,
    config: ClientConfig,
}

impl WlcClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            config: ClientConfig::default(),
        }
    }

    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.config.endpoints = endpoints;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build over the blocking HTTP transport.
    pub fn build(self) -> Result<WlcClient<HttpTransport>> {
        let transport = HttpTransport::new(&self.config)?;
        Ok(WlcClient::with_transport(self.credentials, self.config, transport))
    }

    /// Build over a caller-supplied transport.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> WlcClient<T> {
        WlcClient::with_transport(self.credentials, self.config, transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::memory::MemoryTransport;

    const SECRET: &str = "0f9193177fb67f9b7fc385a0fa7bc4b1";

    fn client(responses: Vec<RawResponse>) -> WlcClient<MemoryTransport> {
        let creds = Credentials::new("app", "biz", SECRET).unwrap();
        WlcClient::builder(creds)
            .endpoints(Endpoints::sandbox("X6xBeJ"))
            .build_with_transport(MemoryTransport::with_responses(responses))
    }

    #[test]
    fn test_builder_overrides() {
        let creds = Credentials::new("app", "biz", SECRET).unwrap();
        let client = WlcClient::builder(creds)
            .timeout(Duration::from_secs(3))
            .user_agent("custom/1.0")
            .build_with_transport(MemoryTransport::new());

        assert_eq!(client.config().timeout, Duration::from_secs(3));
        assert_eq!(client.config().user_agent, "custom/1.0");
        assert_eq!(client.config().endpoints, Endpoints::production());
    }

    #[test]
    fn test_build_http_client() {
        let creds = Credentials::new("app", "biz", SECRET).unwrap();
        let client = WlcClient::new(creds).unwrap();
        assert_eq!(client.credentials().app_id(), "app");
    }

    #[test]
    fn test_query_uses_configured_endpoint() {
        let client = client(vec![RawResponse::json(
            r#"{"errcode":0,"errmsg":"OK","data":{"result":{"status":0,"pi":"p"}}}"#,
        )]);
        let resp = client.query("100000000000000001").unwrap();
        assert!(resp.is_success());

        let sent = client.transport().last_request().unwrap();
        assert_eq!(sent.url, "https://wlc.nppa.gov.cn/test/authentication/query/X6xBeJ");
        assert_eq!(sent.query_value("ai"), Some("100000000000000001"));
    }

    #[test]
    fn test_debug_hides_secret() {
        let client = client(Vec::new());
        assert!(!format!("{:?}", client).contains(SECRET));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WlcClient>();
        assert_send_sync::<WlcClient<MemoryTransport>>();
    }
}
