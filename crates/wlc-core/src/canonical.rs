//! Canonical signature string and request signature.
//!
//! The signature input is built as:
//!
//! ```text
//! secret || name_1 || value_1 || name_2 || value_2 || ... || body
//! ```
//!
//! where the names are `appId`, `bizId`, `timestamps` plus every query
//! parameter name, sorted byte-wise ascending. There is no separator between
//! a name and its value, nor between pairs. The service documentation shows
//! `name:value`, but the verifier only accepts the bare concatenation.
//!
//! The signature is the lowercase hex SHA-256 of that string.
//!
//! **CRITICAL**: This format is fixed by the remote verifier. Any change
//! makes every request fail with a signature error.

use crate::crypto::Sha256Hash;

/// Header and parameter names used on the wire.
pub mod keys {
    pub const APP_ID: &str = "appId";
    pub const BIZ_ID: &str = "bizId";
    pub const TIMESTAMPS: &str = "timestamps";
    pub const SIGN: &str = "sign";
    pub const CONTENT_TYPE: &str = "Content-Type";
    /// Subject identifier query parameter.
    pub const AI: &str = "ai";
}

/// Content type sent with every request. Not part of the signature.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Header names that always take part in the signature.
pub const SIGNED_HEADERS: [&str; 3] = [keys::APP_ID, keys::BIZ_ID, keys::TIMESTAMPS];

/// Build the string that gets hashed.
///
/// `headers` may contain names outside [`SIGNED_HEADERS`] (such as
/// `Content-Type`); they are ignored. A value is taken from `headers` first
/// and then from `query`; a signed header that is absent contributes an
/// empty value. Input order never affects the output.
pub fn canonical_string(
    secret: &str,
    headers: &[(&str, &str)],
    query: &[(&str, &str)],
    body: &str,
) -> String {
    let mut names: Vec<&str> = SIGNED_HEADERS.to_vec();
    names.extend(query.iter().map(|(name, _)| *name));
    names.sort_unstable();

    let mut out = String::with_capacity(secret.len() + body.len() + names.len() * 32);
    out.push_str(secret);
    for name in names {
        out.push_str(name);
        if let Some(value) = lookup(headers, name).or_else(|| lookup(query, name)) {
            out.push_str(value);
        }
    }
    out.push_str(body);
    out
}

fn lookup<'a>(pairs: &[(&str, &'a str)], name: &str) -> Option<&'a str> {
    pairs.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
}

/// Compute the request signature: lowercase hex SHA-256 of the canonical string.
pub fn sign(secret: &str, headers: &[(&str, &str)], query: &[(&str, &str)], body: &str) -> String {
    Sha256Hash::hash(canonical_string(secret, headers, query, body).as_bytes()).to_hex()
}
