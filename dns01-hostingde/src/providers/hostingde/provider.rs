//! hosting.de ChallengeProvider trait 实现

use std::time::Duration;

use async_trait::async_trait;

use crate::challenge::dns01_record;
use crate::error::Result;
use crate::traits::ChallengeProvider;

use super::{HostingdeProvider, PROVIDER_NAME};

/// How long the orchestrator should wait for the record to propagate.
const PROPAGATION_TIMEOUT: Duration = Duration::from_secs(120);
/// How often the orchestrator should check propagation.
const POLLING_INTERVAL: Duration = Duration::from_secs(2);

#[async_trait]
impl ChallengeProvider for HostingdeProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn present(&self, domain: &str, _token: &str, key_authorization: &str) -> Result<()> {
        let record = dns01_record(domain, key_authorization);
        log::debug!("[{PROVIDER_NAME}] Presenting challenge for {domain} at {}", record.fqdn);

        self.publisher()
            .publish(
                &self.zone,
                &self.auth_token,
                &record.fqdn,
                &record.value,
                record.ttl,
            )
            .await
    }

    async fn clean_up(&self, domain: &str, _token: &str, key_authorization: &str) -> Result<()> {
        let record = dns01_record(domain, key_authorization);
        log::debug!("[{PROVIDER_NAME}] Cleaning up challenge for {domain} at {}", record.fqdn);

        self.retractor()
            .retract(&self.zone, &self.auth_token, &record.fqdn, &record.value)
            .await
    }

    fn timeout(&self) -> (Duration, Duration) {
        (PROPAGATION_TIMEOUT, POLLING_INTERVAL)
    }
}
