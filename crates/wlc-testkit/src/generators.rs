//! Proptest generators for property-based testing.

use proptest::prelude::*;
use std::collections::BTreeMap;

use wlc_core::canonical::SIGNED_HEADERS;
use wlc_core::{BehaviorType, CheckRequest, Collection, Credentials, LoginoutRequest, ReportType};

/// Hex text of a random 16-byte key.
pub fn secret_key() -> impl Strategy<Value = String> {
    any::<[u8; 16]>().prop_map(hex::encode)
}

/// A non-empty alphanumeric identifier.
pub fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,32}".prop_map(String::from)
}

/// Valid credentials with random identifiers and key.
pub fn credentials() -> impl Strategy<Value = Credentials> {
    (identifier(), identifier(), secret_key())
        .prop_filter_map("valid credentials", |(app_id, biz_id, secret)| {
            Credentials::new(app_id, biz_id, secret).ok()
        })
}

/// Millisecond timestamps between 2001 and 2286.
pub fn timestamps() -> impl Strategy<Value = u64> {
    1_000_000_000_000u64..10_000_000_000_000u64
}

/// Query pairs with distinct names, none of which collide with a signed header.
pub fn query_pairs(max: usize) -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map("[A-Za-z][A-Za-z0-9_]{0,11}", "[A-Za-z0-9]{0,24}", 0..=max)
        .prop_map(|map: BTreeMap<String, String>| {
            map.into_iter()
                .filter(|(name, _)| !SIGNED_HEADERS.contains(&name.as_str()))
                .collect()
        })
}

/// Body text, printable, possibly empty.
pub fn body() -> impl Strategy<Value = String> {
    "\\PC{0,128}".prop_map(String::from)
}

/// Payload bytes of at most `max_len` bytes.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

pub fn check_request() -> impl Strategy<Value = CheckRequest> {
    ("[0-9]{18}", "\\PC{1,8}", "[0-9]{17}[0-9X]")
        .prop_map(|(ai, name, id_num)| CheckRequest::new(ai, name, id_num))
}

pub fn behavior_type() -> impl Strategy<Value = BehaviorType> {
    prop_oneof![Just(BehaviorType::Offline), Just(BehaviorType::Online)]
}

/// A collection entry that carries the identifier its report type needs.
pub fn collection() -> impl Strategy<Value = Collection> {
    (
        1u32..=128,
        "[0-9]{1,32}",
        behavior_type(),
        0i64..=4_000_000_000,
        prop_oneof![Just(ReportType::Verified), Just(ReportType::Guest)],
        "[a-z0-9]{38}",
    )
        .prop_map(|(no, si, bt, ot, ct, id)| match ct {
            ReportType::Verified => Collection::verified(no, si, bt, ot, id),
            ReportType::Guest => Collection::guest(no, si, bt, ot, id),
        })
}

/// A batch that passes local validation.
pub fn loginout_request() -> impl Strategy<Value = LoginoutRequest> {
    prop::collection::vec(collection(), 1..=16).prop_map(LoginoutRequest::new)
}

/// Everything that goes into one signature.
#[derive(Debug, Clone)]
pub struct SignParams {
    pub secret: String,
    pub app_id: String,
    pub biz_id: String,
    pub timestamps: String,
    pub query: Vec<(String, String)>,
    pub body: String,
}

impl SignParams {
    pub fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("appId", self.app_id.as_str()),
            ("bizId", self.biz_id.as_str()),
            ("timestamps", self.timestamps.as_str()),
        ]
    }

    pub fn query(&self) -> Vec<(&str, &str)> {
        self.query
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect()
    }

    pub fn sign(&self) -> String {
        wlc_core::sign(&self.secret, &self.headers(), &self.query(), &self.body)
    }
}

impl Arbitrary for SignParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            secret_key(),
            identifier(),
            identifier(),
            timestamps(),
            query_pairs(6),
            body(),
        )
            .prop_map(|(secret, app_id, biz_id, ts, query, body)| SignParams {
                secret,
                app_id,
                biz_id,
                timestamps: ts.to_string(),
                query,
                body,
            })
            .boxed()
    }
}
