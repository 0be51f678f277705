//! Transport abstraction for signed requests.
//!
//! The transport only moves bytes. Signing and encryption happen before a
//! [`SignedRequest`] is built, and decoding happens after a [`RawResponse`]
//! comes back, so a transport never sees credentials.

use bytes::Bytes;
use std::borrow::Cow;
use std::fmt;

use crate::error::TransportError;

/// HTTP method used by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully assembled request, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub method: Method,
    /// Endpoint URL without the query string.
    pub url: String,
    /// Query pairs, appended to the URL by the transport.
    pub query: Vec<(String, String)>,
    /// Headers in send order, `sign` last.
    pub headers: Vec<(&'static str, String)>,
    /// Envelope text for POST, `None` for GET.
    pub body: Option<String>,
}

impl SignedRequest {
    /// First header value with this exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// First query value with this exact name.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body of a response, undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    /// Response with the given HTTP status and body.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 response carrying `body`.
    pub fn json(body: impl Into<String>) -> Self {
        Self::new(200, body.into())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Sends a signed request and returns the raw response.
///
/// Implementations must be thread-safe (Send + Sync). Exactly one attempt
/// is made per call.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &SignedRequest) -> Result<RawResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn execute(&self, request: &SignedRequest) -> Result<RawResponse, TransportError> {
        (**self).execute(request)
    }
}

/// An in-memory transport for testing.
///
/// Records every request and answers from a queue of canned responses.
pub mod memory {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Mutex, MutexGuard};

    type Reply = Result<RawResponse, TransportError>;

    /// Scripted [`Transport`]. Calls with an empty queue fail with
    /// [`TransportError::Connection`].
    #[derive(Default)]
    pub struct MemoryTransport {
        requests: Mutex<Vec<SignedRequest>>,
        replies: Mutex<VecDeque<Reply>>,
    }

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        // A panicking test thread must not hide what was recorded.
        mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    impl MemoryTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Transport that answers with `responses`, in order.
        pub fn with_responses(responses: impl IntoIterator<Item = RawResponse>) -> Self {
            let transport = Self::new();
            for response in responses {
                transport.push_response(response);
            }
            transport
        }

        pub fn push_response(&self, response: RawResponse) {
            lock(&self.replies).push_back(Ok(response));
        }

        /// Queue a failure for the next call.
        pub fn push_error(&self, error: TransportError) {
            lock(&self.replies).push_back(Err(error));
        }

        /// Every request seen so far, oldest first.
        pub fn requests(&self) -> Vec<SignedRequest> {
            lock(&self.requests).clone()
        }

        pub fn request_count(&self) -> usize {
            lock(&self.requests).len()
        }

        pub fn last_request(&self) -> Option<SignedRequest> {
            lock(&self.requests).last().cloned()
        }

        /// Canned replies not yet consumed.
        pub fn pending(&self) -> usize {
            lock(&self.replies).len()
        }
    }

    impl Transport for MemoryTransport {
        fn execute(&self, request: &SignedRequest) -> Reply {
            lock(&self.requests).push(request.clone());
            lock(&self.replies).pop_front().unwrap_or_else(|| {
                Err(TransportError::Connection(
                    "memory transport has no queued response".into(),
                ))
            })
        }
    }
}
