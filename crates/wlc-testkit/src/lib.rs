//! # WLC Testkit
//!
//! Testing utilities for the WLC client.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: signatures and envelopes with known expected output
//! - **Generators**: proptest strategies for credentials, signature inputs and requests
//! - **Fixtures**: sandbox credentials, the scripted sandbox cases, canned responses
//! - **Verifier**: checks a captured request the way the service would
//!
//! ## Golden Vectors
//!
//! ```rust
//! use wlc_testkit::vectors::signature_vectors;
//!
//! for vector in signature_vectors() {
//!     assert_eq!(vector.sign(), vector.expected_sign, "{}", vector.name);
//! }
//! ```
//!
//! ## End-to-end checks
//!
//! ```rust
//! use wlc_core::CheckStatus;
//! use wlc_testkit::fixtures::{check_response, TestFixture};
//!
//! let fixture = TestFixture::new().unwrap();
//! fixture.respond(check_response(CheckStatus::Pending, None));
//!
//! let response = fixture.client.query("200000000000000001").unwrap();
//! assert_eq!(response.result().unwrap().check_status(), Some(CheckStatus::Pending));
//! assert!(fixture.verify_last().is_ok());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;
pub mod verifier;

pub use fixtures::{sandbox_cases, sandbox_credentials, SandboxCase, SandboxOperation, TestFixture};
pub use verifier::{decode_payload, verify_request, VerifyError};
