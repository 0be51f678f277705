//! Request and response bodies exchanged with the service.
//!
//! Requests are JSON-encoded, then sealed into an [`Envelope`](crate::Envelope)
//! before sending. Responses arrive as plain JSON.

use serde::{Deserialize, Serialize};

use crate::codes::ErrorCode;

/// Identity check submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Caller-assigned subject identifier.
    pub ai: String,
    /// Real name.
    pub name: String,
    /// National identity number.
    #[serde(rename = "idNum")]
    pub id_num: String,
}

impl CheckRequest {
    /// Build a check request for subject `ai`.
    pub fn new(ai: impl Into<String>, name: impl Into<String>, id_num: impl Into<String>) -> Self {
        Self {
            ai: ai.into(),
            name: name.into(),
            id_num: id_num.into(),
        }
    }
}

/// Outcome of an identity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CheckStatus {
    Success = 0,
    Pending = 1,
    Failed = 2,
}

impl CheckStatus {
    /// Map the numeric wire status; unknown values give `None`.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Success),
            1 => Some(Self::Pending),
            2 => Some(Self::Failed),
            _ => None,
        }
    }
}

/// Common shape of every response: `{"errcode", "errmsg", "data"}`.
///
/// A non-zero `errcode` is a business outcome, not a fault.
pub trait ServiceResponse {
    fn errcode(&self) -> i32;

    fn errmsg(&self) -> &str;

    fn is_success(&self) -> bool {
        self.errcode() == 0
    }

    /// The documented code for a non-zero `errcode`, if known.
    fn error_code(&self) -> Option<ErrorCode> {
        ErrorCode::from_code(self.errcode())
    }
}

/// Response to both check and query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResponse {
    #[serde(default)]
    pub errcode: i32,
    #[serde(default)]
    pub errmsg: String,
    #[serde(default)]
    pub data: Option<CheckData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckData {
    #[serde(default)]
    pub result: Option<CheckResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// 0 success, 1 pending, 2 failed.
    #[serde(default)]
    pub status: i32,
    /// Unique user identifier, present once verification succeeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pi: Option<String>,
}

impl CheckResult {
    pub fn check_status(&self) -> Option<CheckStatus> {
        CheckStatus::from_i32(self.status)
    }
}

impl CheckResponse {
    /// The check result, if the response carried one.
    pub fn result(&self) -> Option<&CheckResult> {
        self.data.as_ref()?.result.as_ref()
    }
}

impl ServiceResponse for CheckResponse {
    fn errcode(&self) -> i32 {
        self.errcode
    }

    fn errmsg(&self) -> &str {
        &self.errmsg
    }
}

/// Behavior type of a collection entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum BehaviorType {
    /// Player went offline.
    Offline = 0,
    /// Player came online.
    Online = 1,
}

impl From<BehaviorType> for u8 {
    fn from(value: BehaviorType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for BehaviorType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Offline),
            1 => Ok(Self::Online),
            other => Err(format!("invalid behavior type: {}", other)),
        }
    }
}

/// Reporting type of a collection entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum ReportType {
    /// Already-verified user; `pi` is required.
    Verified = 0,
    /// Guest user; `di` is required.
    Guest = 2,
}

impl From<ReportType> for u8 {
    fn from(value: ReportType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for ReportType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Verified),
            2 => Ok(Self::Guest),
            other => Err(format!("invalid report type: {}", other)),
        }
    }
}

/// One login/logout event.
///
/// Every field is always serialized, including an empty `di` or `pi`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Sequence number within the batch, echoed back in the result.
    pub no: u32,
    /// Session identifier.
    pub si: String,
    pub bt: BehaviorType,
    /// Event time, unix seconds.
    pub ot: i64,
    pub ct: ReportType,
    /// Device identifier, required for guests.
    #[serde(default)]
    pub di: String,
    /// User identifier, required for verified users.
    #[serde(default)]
    pub pi: String,
}

impl Collection {
    /// Event for an already-verified user.
    pub fn verified(
        no: u32,
        si: impl Into<String>,
        bt: BehaviorType,
        ot: i64,
        pi: impl Into<String>,
    ) -> Self {
        Self {
            no,
            si: si.into(),
            bt,
            ot,
            ct: ReportType::Verified,
            di: String::new(),
            pi: pi.into(),
        }
    }

    /// Event for a guest.
    pub fn guest(
        no: u32,
        si: impl Into<String>,
        bt: BehaviorType,
        ot: i64,
        di: impl Into<String>,
    ) -> Self {
        Self {
            no,
            si: si.into(),
            bt,
            ot,
            ct: ReportType::Guest,
            di: di.into(),
            pi: String::new(),
        }
    }
}

/// Behavior report batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginoutRequest {
    pub collections: Vec<Collection>,
}

impl LoginoutRequest {
    /// Wrap a batch of behavior records.
    pub fn new(collections: Vec<Collection>) -> Self {
        Self { collections }
    }
}

/// Response to a behavior report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginoutResponse {
    #[serde(default)]
    pub errcode: i32,
    #[serde(default)]
    pub errmsg: String,
    #[serde(default)]
    pub data: Option<LoginoutData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginoutData {
    #[serde(default)]
    pub result: Vec<LoginoutResult>,
}

/// Per-entry outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginoutResult {
    #[serde(default)]
    pub no: u32,
    #[serde(default)]
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pi: Option<String>,
}

impl LoginoutResponse {
    pub fn results(&self) -> &[LoginoutResult] {
        self.data.as_ref().map(|d| d.result.as_slice()).unwrap_or(&[])
    }
}

impl ServiceResponse for LoginoutResponse {
    fn errcode(&self) -> i32 {
        self.errcode
    }

    fn errmsg(&self) -> &str {
        &self.errmsg
    }
}
