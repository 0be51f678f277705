//! # WLC Core
//!
//! Pure primitives for talking to the WLC identity-verification and
//! behavior-reporting service.
//!
//! This crate contains no I/O and no networking. It covers the parts of the
//! protocol that must be byte-exact for the remote verifier to accept a request:
//!
//! - [`Credentials`] - app id, business id and the AES-128-GCM key derived from the shared secret
//! - [`envelope`] - the `{"data":"<base64>"}` encrypted payload envelope
//! - [`canonical`] - the sorted, separator-free signature string and its SHA-256 digest
//! - [`messages`] - request and response bodies for check, query and loginout
//! - [`codes`] - the service's fixed table of error codes
//!
//! ## Signing
//!
//! ```rust
//! use wlc_core::canonical::{canonical_string, sign};
//!
//! let headers = [("appId", "A"), ("bizId", "B"), ("timestamps", "1000")];
//! let query = [("ai", "X")];
//!
//! assert_eq!(
//!     canonical_string("S", &headers, &query, ""),
//!     "SaiXappIdAbizIdBtimestamps1000"
//! );
//! assert_eq!(sign("S", &headers, &query, "").len(), 64);
//! ```

pub mod canonical;
pub mod codes;
pub mod credentials;
pub mod crypto;
pub mod envelope;
pub mod error;
pub mod messages;
pub mod validation;

pub use canonical::{canonical_string, sign};
pub use codes::ErrorCode;
pub use credentials::Credentials;
pub use crypto::{EnvelopeNonce, Sha256Hash, KEY_LEN, NONCE_LEN, TAG_LEN};
pub use envelope::Envelope;
pub use error::{CoreError, Result, ValidationError};
pub use messages::{
    BehaviorType, CheckData, CheckRequest, CheckResponse, CheckResult, CheckStatus, Collection,
    LoginoutData, LoginoutRequest, LoginoutResponse, LoginoutResult, ReportType, ServiceResponse,
};
pub use validation::{validate_check_request, validate_loginout_request, validate_subject_id};
