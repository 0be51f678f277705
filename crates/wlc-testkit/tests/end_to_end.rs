//! Client requests checked by a receiving-side verifier, offline.

use wlc_core::{
    BehaviorType, CheckRequest, CheckStatus, Collection, ErrorCode, LoginoutRequest,
    ServiceResponse,
};
use wlc_testkit::fixtures::{
    check_response, error_response, loginout_response, sandbox_cases, SandboxOperation,
    TestFixture, SANDBOX_PI,
};
use wlc_testkit::vectors::verify_all_vectors;
use wlc_testkit::{decode_payload, VerifyError};

#[test]
fn test_golden_vectors() {
    for (name, matches, actual) in verify_all_vectors() {
        assert!(matches, "vector '{}' produced {}", name, actual);
    }
}

#[test]
fn test_check_is_accepted_by_verifier() {
    let fixture = TestFixture::new().unwrap();
    fixture.respond(check_response(CheckStatus::Success, Some(SANDBOX_PI)));

    let request = CheckRequest::new("100000000000000001", "某一一", "110000190101010001");
    let response = fixture.client.check(&request).unwrap();
    assert_eq!(response.result().unwrap().pi.as_deref(), Some(SANDBOX_PI));

    let sent = fixture.last_request().unwrap();
    let received: CheckRequest = decode_payload(&fixture.credentials, &sent).unwrap();
    assert_eq!(received, request);
}

#[test]
fn test_loginout_is_accepted_by_verifier() {
    let fixture = TestFixture::new().unwrap();
    fixture.respond(loginout_response(&[]));

    let batch = LoginoutRequest::new(vec![
        Collection::verified(1, "s1", BehaviorType::Online, 1622028530, SANDBOX_PI),
        Collection::guest(2, "s2", BehaviorType::Offline, 1622028531, "device"),
    ]);
    let response = fixture.client.loginout(&batch).unwrap();
    assert!(response.is_success());

    let received: LoginoutRequest =
        decode_payload(&fixture.credentials, &fixture.last_request().unwrap()).unwrap();
    assert_eq!(received, batch);
}

#[test]
fn test_query_is_accepted_by_verifier() {
    let fixture = TestFixture::new().unwrap();
    fixture.respond(error_response(ErrorCode::NoAuthRecord));

    let response = fixture.client.query("999999999999999999").unwrap();
    assert_eq!(response.error_code(), Some(ErrorCode::NoAuthRecord));
    assert_eq!(fixture.verify_last().unwrap(), None);
}

#[test]
fn test_verify_without_request() {
    let fixture = TestFixture::new().unwrap();
    assert!(matches!(fixture.verify_last(), Err(VerifyError::NoRequest)));
}

/// Replays every scripted sandbox case against canned answers.
#[test]
fn test_sandbox_cases_offline() {
    for case in sandbox_cases() {
        let fixture = TestFixture::with_endpoints(case.endpoints()).unwrap();

        match case.operation {
            SandboxOperation::Check => {
                let status = case.expected_status.unwrap();
                for request in case.check_requests() {
                    fixture.respond(check_response(status, None));
                    let response = fixture.client.check(&request).unwrap();
                    assert_eq!(response.result().unwrap().check_status(), Some(status));

                    let sent = fixture.last_request().unwrap();
                    assert_eq!(sent.url, case.endpoints().check);
                    let received: CheckRequest =
                        decode_payload(&fixture.credentials, &sent).unwrap();
                    assert_eq!(received, request);
                }
            }
            SandboxOperation::Query => {
                let status = case.expected_status.unwrap();
                for ai in case.query_subjects() {
                    fixture.respond(check_response(status, None));
                    let response = fixture.client.query(ai).unwrap();
                    assert_eq!(response.result().unwrap().check_status(), Some(status));

                    let sent = fixture.last_request().unwrap();
                    assert_eq!(sent.url, case.endpoints().query);
                    assert_eq!(sent.query_value("ai"), Some(ai));
                    fixture.verify_last().unwrap();
                }
            }
            SandboxOperation::Loginout => {
                let batch = case.loginout_request(1622028535).unwrap();
                fixture.respond(loginout_response(&[]));
                assert!(fixture.client.loginout(&batch).unwrap().is_success());

                let sent = fixture.last_request().unwrap();
                assert_eq!(sent.url, case.endpoints().loginout);
                let received: LoginoutRequest =
                    decode_payload(&fixture.credentials, &sent).unwrap();
                assert_eq!(received, batch);
            }
        }
    }
}
