//! Client configuration.

use std::time::Duration;

/// Production identity check endpoint.
pub const CHECK_URL: &str = "https://api.wlc.nppa.gov.cn/idcard/authentication/check";
/// Production check-status query endpoint.
pub const QUERY_URL: &str = "http://api2.wlc.nppa.gov.cn/idcard/authentication/query";
/// Production behavior report endpoint.
pub const LOGINOUT_URL: &str = "http://api2.wlc.nppa.gov.cn/behavior/collection/loginout";

/// Root of the acceptance sandbox. Each scripted case appends its code.
pub const SANDBOX_BASE_URL: &str = "https://wlc.nppa.gov.cn/test";

/// Fixed request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The three operation URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub check: String,
    pub query: String,
    pub loginout: String,
}

impl Endpoints {
    /// The production service URLs.
    pub fn production() -> Self {
        Self {
            check: CHECK_URL.to_string(),
            query: QUERY_URL.to_string(),
            loginout: LOGINOUT_URL.to_string(),
        }
    }

    /// Sandbox URLs for one scripted test case.
    pub fn sandbox(test_code: &str) -> Self {
        Self {
            check: format!("{}/authentication/check/{}", SANDBOX_BASE_URL, test_code),
            query: format!("{}/authentication/query/{}", SANDBOX_BASE_URL, test_code),
            loginout: format!("{}/collection/loginout/{}", SANDBOX_BASE_URL, test_code),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::production()
    }
}

/// Configuration for a [`WlcClient`](crate::WlcClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    /// Per-request timeout, covering connect through body read.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::production(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("wlc-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
