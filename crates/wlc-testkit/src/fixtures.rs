//! Test fixtures and helpers.
//!
//! Sandbox credentials and scripted cases, canned responses, and a client
//! wired to an in-memory transport.

use serde_json::json;
use std::sync::Arc;
use wlc_client::transport::memory::MemoryTransport;
use wlc_client::{Endpoints, RawResponse, SignedRequest, WlcClient};
use wlc_core::{
    BehaviorType, CheckRequest, CheckStatus, Collection, Credentials, ErrorCode, LoginoutRequest,
};

use crate::verifier::{verify_request, VerifyError};

/// Demo application id published for the acceptance sandbox.
pub const SANDBOX_APP_ID: &str = "6e1645a413f0437a96abab8f46d3aebd";
pub const SANDBOX_BIZ_ID: &str = "1101999999";
pub const SANDBOX_SECRET_KEY: &str = "0f9193177fb67f9b7fc385a0fa7bc4b1";

/// User identifier the sandbox issues for verified loginout reports.
pub const SANDBOX_PI: &str = "1fffbjzos82bs9cnyj1dna7d6d29zg4esnh99u";

pub fn sandbox_credentials() -> wlc_core::Result<Credentials> {
    Credentials::new(SANDBOX_APP_ID, SANDBOX_BIZ_ID, SANDBOX_SECRET_KEY)
}

/// Which operation a scripted case exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SandboxOperation {
    Check,
    Query,
    Loginout,
}

/// One scripted acceptance case.
#[derive(Debug, Clone, Copy)]
pub struct SandboxCase {
    pub number: u8,
    /// Code appended to the sandbox path.
    pub code: &'static str,
    pub operation: SandboxOperation,
    pub description: &'static str,
    /// Expected `data.result.status` for check and query cases.
    pub expected_status: Option<CheckStatus>,
}

impl SandboxCase {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::sandbox(self.code)
    }

    /// Identity submissions for check cases, empty otherwise.
    pub fn check_requests(&self) -> Vec<CheckRequest> {
        if self.operation != SandboxOperation::Check {
            return Vec::new();
        }
        self.identities()
            .iter()
            .map(|(ai, name, id_num)| CheckRequest::new(*ai, *name, *id_num))
            .collect()
    }

    /// Subject identifiers for query cases, empty otherwise.
    pub fn query_subjects(&self) -> Vec<&'static str> {
        if self.operation != SandboxOperation::Query {
            return Vec::new();
        }
        self.identities().iter().map(|(ai, _, _)| *ai).collect()
    }

    /// The behavior batch for loginout cases, stamped `now_secs - 5`.
    pub fn loginout_request(&self, now_secs: i64) -> Option<LoginoutRequest> {
        let ot = now_secs - 5;
        match (self.operation, self.number) {
            (SandboxOperation::Loginout, 7) => Some(LoginoutRequest::new(vec![Collection::guest(
                2,
                "100000",
                BehaviorType::Online,
                ot,
                "12121212121212121212121212121212",
            )])),
            (SandboxOperation::Loginout, _) => Some(LoginoutRequest::new(vec![Collection::verified(
                1,
                "100000000000000008",
                BehaviorType::Online,
                ot,
                SANDBOX_PI,
            )])),
            _ => None,
        }
    }

    fn identities(&self) -> &'static [(&'static str, &'static str, &'static str)] {
        match self.expected_status {
            Some(CheckStatus::Success) => VERIFIED_IDENTITIES,
            Some(CheckStatus::Pending) => PENDING_IDENTITIES,
            Some(CheckStatus::Failed) => FAILED_IDENTITIES,
            None => &[],
        }
    }
}

const VERIFIED_IDENTITIES: &[(&str, &str, &str)] = &[
    ("100000000000000001", "某一一", "110000190101010001"),
    ("100000000000000002", "某一二", "110000190101020007"),
    ("100000000000000003", "某一三", "110000190101030002"),
    ("100000000000000004", "某一四", "110000190101040008"),
    ("100000000000000005", "某一五", "11000019010101001X"),
    ("100000000000000006", "某一六", "110000190101020015"),
    ("100000000000000007", "某一七", "110000190101030010"),
    ("100000000000000008", "某一八", "110000190101040016"),
];

const PENDING_IDENTITIES: &[(&str, &str, &str)] = &[
    ("200000000000000001", "某二一", "110000190201010009"),
    ("200000000000000002", "某二二", "110000190201020004"),
    ("200000000000000003", "某二三", "11000019020103000X"),
    ("200000000000000004", "某二四", "110000190201040005"),
    ("200000000000000005", "某二五", "110000190201010017"),
    ("200000000000000006", "某二六", "110000190201020012"),
    ("200000000000000007", "某二七", "110000190201030018"),
    ("200000000000000008", "某二八", "110000190201040013"),
];

const FAILED_IDENTITIES: &[(&str, &str, &str)] = &[
    ("300000000000000001", "小S", "110000190201010017"),
    ("300000000000000002", "大S", "110000190201010017"),
];

const fn case(
    number: u8,
    code: &'static str,
    operation: SandboxOperation,
    description: &'static str,
    expected_status: Option<CheckStatus>,
) -> SandboxCase {
    SandboxCase {
        number,
        code,
        operation,
        description,
        expected_status,
    }
}

/// The eight scripted sandbox cases, in order.
pub fn sandbox_cases() -> Vec<SandboxCase> {
    use SandboxOperation::*;

    vec![
        case(1, "MhQ23v", Check, "check returns verified", Some(CheckStatus::Success)),
        case(2, "w6HkUY", Check, "check returns pending", Some(CheckStatus::Pending)),
        case(3, "63VT9a", Check, "check returns failed", Some(CheckStatus::Failed)),
        case(4, "X6xBeJ", Query, "query returns verified", Some(CheckStatus::Success)),
        case(5, "sKFMbR", Query, "query returns pending", Some(CheckStatus::Pending)),
        case(6, "N3bAKP", Query, "query returns failed", Some(CheckStatus::Failed)),
        case(7, "nz324r", Loginout, "guest behavior report", None),
        case(8, "DpSFTj", Loginout, "verified user behavior report", None),
    ]
}

// ============================================================================
// Canned responses
// ============================================================================

/// A successful check or query response.
pub fn check_response(status: CheckStatus, pi: Option<&str>) -> RawResponse {
    let mut result = json!({ "status": status as i32 });
    if let Some(pi) = pi {
        result["pi"] = json!(pi);
    }
    RawResponse::json(json!({ "errcode": 0, "errmsg": "OK", "data": { "result": result } }).to_string())
}

/// A response carrying only a documented error code.
pub fn error_response(code: ErrorCode) -> RawResponse {
    RawResponse::json(json!({ "errcode": code.code(), "errmsg": code.name() }).to_string())
}

/// A loginout response with one `(no, errcode)` entry per failed event.
pub fn loginout_response(failures: &[(u32, ErrorCode)]) -> RawResponse {
    let errcode = if failures.is_empty() {
        0
    } else {
        ErrorCode::PartialReport.code()
    };
    let result: Vec<_> = failures
        .iter()
        .map(|(no, code)| json!({ "no": no, "errcode": code.code(), "errmsg": code.name() }))
        .collect();
    RawResponse::json(
        json!({ "errcode": errcode, "errmsg": "OK", "data": { "result": result } }).to_string(),
    )
}

// ============================================================================
// Client fixture
// ============================================================================

/// A client over a shared [`MemoryTransport`].
pub struct TestFixture {
    pub credentials: Credentials,
    pub transport: Arc<MemoryTransport>,
    pub client: WlcClient<Arc<MemoryTransport>>,
}

impl TestFixture {
    /// Fixture with the sandbox credentials and production endpoints.
    pub fn new() -> wlc_core::Result<Self> {
        Self::with_endpoints(Endpoints::production())
    }

    pub fn with_endpoints(endpoints: Endpoints) -> wlc_core::Result<Self> {
        let credentials = sandbox_credentials()?;
        let transport = Arc::new(MemoryTransport::new());
        let client = WlcClient::builder(credentials.clone())
            .endpoints(endpoints)
            .build_with_transport(Arc::clone(&transport));
        Ok(Self {
            credentials,
            transport,
            client,
        })
    }

    /// Queue the next response.
    pub fn respond(&self, response: RawResponse) -> &Self {
        self.transport.push_response(response);
        self
    }

    pub fn last_request(&self) -> Option<SignedRequest> {
        self.transport.last_request()
    }

    /// Verify the last request as the server would; POST payload if any.
    pub fn verify_last(&self) -> Result<Option<Vec<u8>>, VerifyError> {
        match self.last_request() {
            Some(request) => verify_request(&self.credentials, &request),
            None => Err(VerifyError::NoRequest),
        }
    }
}
