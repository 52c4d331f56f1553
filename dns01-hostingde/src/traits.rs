use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// DNS-01 challenge provider Trait
///
/// The capability set an ACME client drives: publish the challenge record,
/// remove it after validation, and report how long to wait for propagation.
#[async_trait]
pub trait ChallengeProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// Create the TXT record that fulfils the DNS-01 challenge for `domain`.
    async fn present(&self, domain: &str, token: &str, key_authorization: &str) -> Result<()>;

    /// Remove the TXT record created by [`present`](Self::present).
    async fn clean_up(&self, domain: &str, token: &str, key_authorization: &str) -> Result<()>;

    /// Propagation wait budget as `(timeout, poll interval)`.
    fn timeout(&self) -> (Duration, Duration);
}
