//! TXT record publication

use reqwest::Method;

use crate::error::Result;

use super::{
    HostingdeTransport, PROVIDER_NAME, RecordMutation, UpdateEnvelope, ZONE_UPDATE_PATH,
    ZoneSelector,
};

/// Adds challenge TXT records through `zoneUpdate`.
///
/// Each call sends exactly one addition. Publishing the same record twice is
/// not deduplicated here; what happens is up to the provider.
#[derive(Debug, Clone, Copy)]
pub struct RecordPublisher<'a> {
    transport: &'a HostingdeTransport,
}

impl<'a> RecordPublisher<'a> {
    pub fn new(transport: &'a HostingdeTransport) -> Self {
        Self { transport }
    }

    /// Envelope carrying a single TXT addition and no deletions.
    pub fn build_envelope(
        zone: &ZoneSelector,
        auth_token: &str,
        record_name: &str,
        record_value: &str,
        ttl: u32,
    ) -> UpdateEnvelope {
        UpdateEnvelope::new(auth_token, zone.clone())
            .with_mutation(RecordMutation::add_txt(record_name, record_value, ttl))
    }

    pub async fn publish(
        &self,
        zone: &ZoneSelector,
        auth_token: &str,
        record_name: &str,
        record_value: &str,
        ttl: u32,
    ) -> Result<()> {
        let envelope = Self::build_envelope(zone, auth_token, record_name, record_value, ttl);
        let body = envelope.to_json()?;
        log::debug!(
            "[{PROVIDER_NAME}] Publish request body: {}",
            envelope.redacted_json()
        );

        self.transport
            .execute(Method::POST, ZONE_UPDATE_PATH, body)
            .await?;

        log::info!(
            "[{PROVIDER_NAME}] Published TXT record {} in zone {}",
            record_name,
            zone.name
        );
        Ok(())
    }
}
