//! DNS-01 challenge record derivation
//!
//! Turns the ACME challenge parameters into the TXT record that has to be
//! published: `_acme-challenge.<domain>.` carrying the base64url-encoded
//! SHA-256 digest of the key authorization.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

use crate::providers::common::normalize_domain_name;
use crate::types::Dns01Record;

/// Label prepended to the domain for the challenge record.
pub const ACME_CHALLENGE_LABEL: &str = "_acme-challenge";

/// TTL used for challenge records, in seconds.
pub const DEFAULT_CHALLENGE_TTL: u32 = 120;

/// Compute the TXT record for a DNS-01 challenge.
///
/// A trailing dot on `domain` is accepted; the returned FQDN always carries
/// exactly one.
pub fn dns01_record(domain: &str, key_authorization: &str) -> Dns01Record {
    Dns01Record {
        fqdn: format!(
            "{ACME_CHALLENGE_LABEL}.{}.",
            normalize_domain_name(domain)
        ),
        value: challenge_value(key_authorization),
        ttl: DEFAULT_CHALLENGE_TTL,
    }
}

/// base64url(SHA-256(key authorization)) without padding.
pub fn challenge_value(key_authorization: &str) -> String {
    let digest = Sha256::digest(key_authorization.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}
