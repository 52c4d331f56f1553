//! hosting.de DNS Provider

mod http;
mod provider;
mod publisher;
mod retractor;
mod types;

use crate::error::Result;
use crate::types::{ClientOptions, HostingdeCredentials};

pub use http::HostingdeTransport;
pub use publisher::RecordPublisher;
pub use retractor::RecordRetractor;
pub use types::{
    EchoedRecord, MutationKind, RecordMutation, RecordType, STATUS_SUCCESS, SoaValues,
    UpdateEnvelope, UpdateOutcome, ZoneConfig, ZoneSelector,
};

pub(crate) const PROVIDER_NAME: &str = "hostingde";
/// Relative path of the zone update endpoint.
pub const ZONE_UPDATE_PATH: &str = "/zoneUpdate";

/// hosting.de DNS Provider
///
/// The API key and zone are fixed at construction and never change for the
/// lifetime of the instance.
pub struct HostingdeProvider {
    pub(crate) transport: HostingdeTransport,
    pub(crate) auth_token: String,
    pub(crate) zone: ZoneSelector,
}

impl HostingdeProvider {
    /// Provider talking to the production API with default timeouts.
    pub fn new(credentials: HostingdeCredentials) -> Result<Self> {
        Self::with_options(credentials, &ClientOptions::default())
    }

    /// Credentials are validated before the HTTP client is built, so invalid
    /// input never reaches the network.
    pub fn with_options(credentials: HostingdeCredentials, options: &ClientOptions) -> Result<Self> {
        credentials.validate()?;
        let transport = HostingdeTransport::new(options)?;
        Ok(Self {
            transport,
            auth_token: credentials.api_key,
            zone: ZoneSelector::new(credentials.zone_name),
        })
    }

    pub fn zone(&self) -> &ZoneSelector {
        &self.zone
    }

    pub fn transport(&self) -> &HostingdeTransport {
        &self.transport
    }

    pub fn publisher(&self) -> RecordPublisher<'_> {
        RecordPublisher::new(&self.transport)
    }

    pub fn retractor(&self) -> RecordRetractor<'_> {
        RecordRetractor::new(&self.transport)
    }
}

impl std::fmt::Debug for HostingdeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostingdeProvider")
            .field("base_url", &self.transport.base_url())
            .field("zone", &self.zone.name)
            .finish_non_exhaustive()
    }
}
