//! Golden vectors for signing and sealing.
//!
//! Expected values were computed independently of this workspace (plain
//! SHA-256 and AES-128-GCM). Any change to canonicalization or the envelope
//! layout breaks them.

use wlc_core::{canonical_string, sign, Credentials, Envelope, EnvelopeNonce, NONCE_LEN};

/// A known signature input and its expected output.
#[derive(Debug, Clone)]
pub struct SignatureVector {
    /// Human-readable description.
    pub name: &'static str,
    /// Signing secret.
    pub secret: &'static str,
    /// Value of the `appId` header.
    pub app_id: &'static str,
    /// Value of the `bizId` header.
    pub biz_id: &'static str,
    /// Value of the `timestamps` header.
    pub timestamps: &'static str,
    /// Query pairs, in the order they are passed to the signer.
    pub query: &'static [(&'static str, &'static str)],
    /// Request body; empty for GET.
    pub body: &'static str,
    /// The exact string that gets hashed.
    pub expected_canonical: &'static str,
    /// Lowercase hex SHA-256.
    pub expected_sign: &'static str,
}

impl SignatureVector {
    /// The three signed headers, in wire order.
    pub fn headers(&self) -> [(&'static str, &'static str); 3] {
        [
            ("appId", self.app_id),
            ("bizId", self.biz_id),
            ("timestamps", self.timestamps),
        ]
    }

    /// Canonical string for this input.
    pub fn canonical(&self) -> String {
        canonical_string(self.secret, &self.headers(), self.query, self.body)
    }

    /// Signature for this input.
    pub fn sign(&self) -> String {
        sign(self.secret, &self.headers(), self.query, self.body)
    }
}

/// All signature vectors.
pub fn signature_vectors() -> Vec<SignatureVector> {
    vec![
        SignatureVector {
            name: "GET with one query parameter",
            secret: "S",
            app_id: "A",
            biz_id: "B",
            timestamps: "1000",
            query: &[("ai", "X")],
            body: "",
            expected_canonical: "SaiXappIdAbizIdBtimestamps1000",
            expected_sign: "bd2a0872ef1905569bdc95adbfd6e075488dfbd426097414dbdd13b87cb6e3f5",
        },
        SignatureVector {
            name: "headers only",
            secret: "S",
            app_id: "A",
            biz_id: "B",
            timestamps: "1000",
            query: &[],
            body: "",
            expected_canonical: "SappIdAbizIdBtimestamps1000",
            expected_sign: "03702bcb38df439a3990693edf9ef19061390b4e5bd8e6d4a7cbad7735cb5376",
        },
        SignatureVector {
            name: "mixed-case query names sort byte-wise",
            secret: "S",
            app_id: "A",
            biz_id: "B",
            timestamps: "1000",
            query: &[("alpha", "a"), ("Zeta", "z")],
            body: "body",
            expected_canonical: "SZetazalphaaappIdAbizIdBtimestamps1000body",
            expected_sign: "a59b38e1be0ae7cfc72c7c381aee5cb48b1f8a8224b03e4c54f891f3d853b33e",
        },
        SignatureVector {
            name: "sandbox query",
            secret: "0f9193177fb67f9b7fc385a0fa7bc4b1",
            app_id: "6e1645a413f0437a96abab8f46d3aebd",
            biz_id: "1101999999",
            timestamps: "1622028535743",
            query: &[("ai", "100000000000000001")],
            body: "",
            expected_canonical: "0f9193177fb67f9b7fc385a0fa7bc4b1ai100000000000000001appId6e1645a413f0437a96abab8f46d3aebdbizId1101999999timestamps1622028535743",
            expected_sign: "b318bcfe269975bf372cadcd22c10dbd80dc89189785856eda7baeae63147f75",
        },
        SignatureVector {
            name: "sandbox POST envelope body",
            secret: "0f9193177fb67f9b7fc385a0fa7bc4b1",
            app_id: "6e1645a413f0437a96abab8f46d3aebd",
            biz_id: "1101999999",
            timestamps: "1622028535743",
            query: &[],
            body: r#"{"data":"AAAAAAAAAAAAAAAA"}"#,
            expected_canonical: r#"0f9193177fb67f9b7fc385a0fa7bc4b1appId6e1645a413f0437a96abab8f46d3aebdbizId1101999999timestamps1622028535743{"data":"AAAAAAAAAAAAAAAA"}"#,
            expected_sign: "eb059418897278aa32b9caae59ebfdc8c2ec5e317bd52b5ff5f38526ba84c09f",
        },
    ]
}

/// A known envelope under a fixed nonce.
#[derive(Debug, Clone)]
pub struct EnvelopeVector {
    /// Human-readable description.
    pub name: &'static str,
    /// Secret the AES key is derived from.
    pub secret: &'static str,
    /// Fixed nonce used instead of a random one.
    pub nonce: [u8; NONCE_LEN],
    /// UTF-8 plaintext.
    pub plaintext: &'static str,
    /// Base64 of nonce || ciphertext || tag.
    pub expected_envelope: &'static str,
}

impl EnvelopeVector {
    /// The fixed nonce.
    pub fn nonce(&self) -> EnvelopeNonce {
        EnvelopeNonce::from_bytes(self.nonce)
    }

    /// Seal the plaintext under the fixed nonce.
    pub fn seal(&self) -> wlc_core::Result<Envelope> {
        let credentials = Credentials::new("vector", "vector", self.secret)?;
        credentials.seal_with_nonce(&self.nonce(), self.plaintext.as_bytes())
    }
}

/// All envelope vectors.
pub fn envelope_vectors() -> Vec<EnvelopeVector> {
    vec![EnvelopeVector {
        name: "check request under sandbox secret",
        secret: "0f9193177fb67f9b7fc385a0fa7bc4b1",
        nonce: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        plaintext: r#"{"ai":"100000000000000001","name":"test","idNum":"110000190101010001"}"#,
        expected_envelope: "AAECAwQFBgcICQoLxsHdHFgeKc9bVe4ZubZabMeWV6wc9qUAo3Wokb18HWobrHYU1EstRhga7suaGryjo2d59yj8LLl0XK36M3T386W7RP+D8+WxUxR9Xx9f+MN3fJCMuT4=",
    }]
}

/// Check every vector. Returns `(name, matches, actual)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let signatures = signature_vectors().into_iter().map(|v| {
        let actual = v.sign();
        let matches = actual == v.expected_sign && v.canonical() == v.expected_canonical;
        (v.name.to_string(), matches, actual)
    });

    let envelopes = envelope_vectors().into_iter().map(|v| match v.seal() {
        Ok(envelope) => {
            let matches = envelope.data == v.expected_envelope;
            (v.name.to_string(), matches, envelope.data)
        }
        Err(e) => (v.name.to_string(), false, e.to_string()),
    });

    signatures.chain(envelopes).collect()
}
