//! Property tests for signing and sealing.

use proptest::prelude::*;
use std::collections::HashSet;

use wlc_core::{canonical_string, sign, Credentials, CoreError, NONCE_LEN, TAG_LEN};
use wlc_testkit::generators::{credentials, payload, SignParams};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Shuffling headers and query pairs never changes the signature.
    #[test]
    fn signature_ignores_input_order(
        (params, header_order, query_order) in any::<SignParams>().prop_flat_map(|p| {
            let headers: Vec<usize> = (0..3).collect();
            let query: Vec<usize> = (0..p.query.len()).collect();
            (Just(p), Just(headers).prop_shuffle(), Just(query).prop_shuffle())
        })
    ) {
        let headers = params.headers();
        let query = params.query();
        let shuffled_headers: Vec<_> = header_order.iter().map(|&i| headers[i]).collect();
        let shuffled_query: Vec<_> = query_order.iter().map(|&i| query[i]).collect();

        prop_assert_eq!(
            sign(&params.secret, &shuffled_headers, &shuffled_query, &params.body),
            params.sign()
        );
    }

    /// Changing the body changes the signature.
    #[test]
    fn signature_covers_body(params in any::<SignParams>(), extra in "[a-z]{1,4}") {
        let mut changed = params.clone();
        changed.body.push_str(&extra);
        prop_assert_ne!(changed.sign(), params.sign());
    }

    /// Changing the timestamp changes the signature.
    #[test]
    fn signature_covers_timestamps(params: SignParams) {
        let mut changed = params.clone();
        changed.timestamps.push('0');
        prop_assert_ne!(changed.sign(), params.sign());
    }

    /// Changing either identity header changes the signature.
    #[test]
    fn signature_covers_identity_headers(params: SignParams) {
        let mut app = params.clone();
        app.app_id.push('x');
        prop_assert_ne!(app.sign(), params.sign());

        let mut biz = params.clone();
        biz.biz_id.push('x');
        prop_assert_ne!(biz.sign(), params.sign());
    }

    /// Changing the secret changes the signature.
    #[test]
    fn signature_covers_secret(params in any::<SignParams>(), other in "[0-9a-f]{32}") {
        prop_assume!(other != params.secret);
        let mut changed = params.clone();
        changed.secret = other;
        prop_assert_ne!(changed.sign(), params.sign());
    }

    /// Changing any query value changes the signature.
    #[test]
    fn signature_covers_query_values(params in any::<SignParams>(), index in any::<prop::sample::Index>()) {
        prop_assume!(!params.query.is_empty());
        let i = index.index(params.query.len());
        let mut changed = params.clone();
        changed.query[i].1.push('x');
        prop_assert_ne!(changed.sign(), params.sign());
    }

    /// The canonical string always starts with the secret and ends with the body.
    #[test]
    fn canonical_string_framing(params: SignParams) {
        let s = canonical_string(&params.secret, &params.headers(), &params.query(), &params.body);
        prop_assert!(s.starts_with(&params.secret));
        prop_assert!(s.ends_with(&params.body));
    }

    /// decrypt(encrypt(p)) == p.
    #[test]
    fn envelope_round_trip(creds in credentials(), plaintext in payload(512)) {
        let envelope = creds.encrypt(&plaintext).unwrap();
        prop_assert_eq!(creds.decrypt(&envelope).unwrap(), plaintext);
    }

    /// Another key never opens the envelope.
    #[test]
    fn envelope_rejects_other_key(
        a in credentials(),
        b in credentials(),
        plaintext in payload(256),
    ) {
        prop_assume!(a.secret_key() != b.secret_key());
        let envelope = a.encrypt(&plaintext).unwrap();
        prop_assert!(matches!(b.decrypt(&envelope), Err(CoreError::DecryptionError(_))));
    }

    /// The envelope is nonce || ciphertext || tag.
    #[test]
    fn envelope_length(creds in credentials(), plaintext in payload(256)) {
        use base64::Engine;
        let envelope = creds.encrypt(&plaintext).unwrap();
        let raw = base64::engine::general_purpose::STANDARD.decode(envelope).unwrap();
        prop_assert_eq!(raw.len(), NONCE_LEN + plaintext.len() + TAG_LEN);
    }
}

#[test]
fn nonces_unique_across_many_encryptions() {
    let creds = Credentials::new("app", "biz", "0f9193177fb67f9b7fc385a0fa7bc4b1").unwrap();
    let mut seen = HashSet::new();

    for _ in 0..2000 {
        let envelope = creds.seal(b"same plaintext").unwrap();
        let nonce = envelope.nonce().unwrap();
        assert!(seen.insert(*nonce.as_bytes()), "nonce repeated");
    }
}

#[test]
fn truncated_envelopes_rejected() {
    use base64::Engine;
    let creds = Credentials::new("app", "biz", "0f9193177fb67f9b7fc385a0fa7bc4b1").unwrap();
    let envelope = creds.encrypt(b"payload").unwrap();
    let raw = base64::engine::general_purpose::STANDARD.decode(&envelope).unwrap();

    for len in [0, NONCE_LEN, NONCE_LEN + TAG_LEN - 1, raw.len() - 1] {
        let cut = base64::engine::general_purpose::STANDARD.encode(&raw[..len]);
        assert!(creds.decrypt(&cut).is_err(), "truncated to {} bytes", len);
    }
}
