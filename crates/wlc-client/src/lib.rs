//! # WLC Client
//!
//! Blocking client for the WLC identity-verification and behavior-reporting
//! service.
//!
//! Every call is validated locally, JSON-encoded, sealed with AES-128-GCM
//! (POST), signed, sent once over HTTP and decoded. A non-zero `errcode` is
//! a normal response, not an error.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wlc_client::{CheckRequest, Credentials, Endpoints, WlcClient};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = Credentials::new(
//!     "6e1645a413f0437a96abab8f46d3aebd",
//!     "1101999999",
//!     "0f9193177fb67f9b7fc385a0fa7bc4b1",
//! )?;
//!
//! let client = WlcClient::builder(credentials)
//!     .endpoints(Endpoints::sandbox("MhQ23v"))
//!     .build()?;
//!
//! let response = client.check(&CheckRequest::new(
//!     "100000000000000001",
//!     "某一一",
//!     "110000190101010001",
//! ))?;
//!
//! if let Some(result) = response.result() {
//!     println!("status {:?}, pi {:?}", result.check_status(), result.pi);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing without a network
//!
//! [`transport::memory::MemoryTransport`] records requests and replays canned
//! responses. Pass it to [`WlcClientBuilder::build_with_transport`].

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod transport;

pub use client::{WlcClient, WlcClientBuilder};
pub use config::{ClientConfig, Endpoints, DEFAULT_TIMEOUT};
pub use error::{ClientError, Result, TransportError};
pub use http::HttpTransport;
pub use request::RequestAssembler;
pub use transport::{Method, RawResponse, SignedRequest, Transport};

pub use wlc_core::{
    BehaviorType, CheckRequest, CheckResponse, CheckStatus, Collection, Credentials, ErrorCode,
    LoginoutRequest, LoginoutResponse, ReportType, ServiceResponse,
};
