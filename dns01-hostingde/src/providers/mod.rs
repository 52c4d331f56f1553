//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod hostingde;

pub use hostingde::{
    EchoedRecord, HostingdeProvider, HostingdeTransport, MutationKind, RecordMutation,
    RecordPublisher, RecordRetractor, RecordType, STATUS_SUCCESS, SoaValues, UpdateEnvelope,
    UpdateOutcome, ZONE_UPDATE_PATH, ZoneConfig, ZoneSelector,
};
