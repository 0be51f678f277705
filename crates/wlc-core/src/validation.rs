//! Parameter checks run before a request is assembled.
//!
//! Loginout validation only inspects the first collection entry. Later
//! entries are left for the service to reject per entry.

use crate::error::ValidationError;
use crate::messages::{CheckRequest, LoginoutRequest, ReportType};

/// All three check fields must be non-empty.
pub fn validate_check_request(request: &CheckRequest) -> Result<(), ValidationError> {
    if request.ai.is_empty() {
        return Err(ValidationError::MissingField("ai"));
    }
    if request.name.is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    if request.id_num.is_empty() {
        return Err(ValidationError::MissingField("idNum"));
    }
    Ok(())
}

/// The query subject identifier must be non-empty.
pub fn validate_subject_id(ai: &str) -> Result<(), ValidationError> {
    if ai.is_empty() {
        return Err(ValidationError::MissingField("ai"));
    }
    Ok(())
}

/// Non-empty batch, and the first entry carries the identifier its report type needs.
pub fn validate_loginout_request(request: &LoginoutRequest) -> Result<(), ValidationError> {
    let first = request
        .collections
        .first()
        .ok_or(ValidationError::EmptyCollections)?;

    match first.ct {
        ReportType::Verified if first.pi.is_empty() => Err(ValidationError::MissingPlayerId),
        ReportType::Guest if first.di.is_empty() => Err(ValidationError::MissingDeviceId),
        _ => Ok(()),
    }
}
