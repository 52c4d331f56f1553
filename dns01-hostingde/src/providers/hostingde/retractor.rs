//! TXT record removal

use reqwest::Method;

use crate::error::Result;

use super::{
    HostingdeTransport, PROVIDER_NAME, RecordMutation, UpdateEnvelope, ZONE_UPDATE_PATH,
    ZoneSelector,
};

/// Removes challenge TXT records through `zoneUpdate`.
///
/// A record that is already gone is not special-cased: whatever status the
/// provider answers with other than `success` is returned as `ApiError`.
#[derive(Debug, Clone, Copy)]
pub struct RecordRetractor<'a> {
    transport: &'a HostingdeTransport,
}

impl<'a> RecordRetractor<'a> {
    pub fn new(transport: &'a HostingdeTransport) -> Self {
        Self { transport }
    }

    /// Envelope carrying a single TXT deletion and no additions.
    pub fn build_envelope(
        zone: &ZoneSelector,
        auth_token: &str,
        record_name: &str,
        record_value: &str,
    ) -> UpdateEnvelope {
        UpdateEnvelope::new(auth_token, zone.clone())
            .with_mutation(RecordMutation::delete_txt(record_name, record_value))
    }

    pub async fn retract(
        &self,
        zone: &ZoneSelector,
        auth_token: &str,
        record_name: &str,
        record_value: &str,
    ) -> Result<()> {
        let envelope = Self::build_envelope(zone, auth_token, record_name, record_value);
        let body = envelope.to_json()?;
        log::debug!(
            "[{PROVIDER_NAME}] Cleanup request body: {}",
            envelope.redacted_json()
        );

        self.transport
            .execute(Method::POST, ZONE_UPDATE_PATH, body)
            .await?;

        log::info!(
            "[{PROVIDER_NAME}] Removed TXT record {} from zone {}",
            record_name,
            zone.name
        );
        Ok(())
    }
}
