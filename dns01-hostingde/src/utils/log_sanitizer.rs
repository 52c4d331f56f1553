//! Log sanitization utilities
//!
//! Keeps API tokens and oversized provider responses out of debug/error logs.

/// Maximum number of bytes of a response body included in a log line.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible.
const VISIBLE_SECRET_PREFIX: usize = 4;

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged; longer ones are cut on a
/// char boundary and suffixed with the original byte length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let mut end = TRUNCATE_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

/// Mask a credential, keeping a short prefix so tokens can still be told apart.
///
/// Secrets not longer than twice the visible prefix are fully masked.
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= VISIBLE_SECRET_PREFIX * 2 {
        return "***".to_string();
    }
    let prefix: String = secret.chars().take(VISIBLE_SECRET_PREFIX).collect();
    format!("{prefix}***")
}
