//! # dns01-hostingde
//!
//! Solves ACME DNS-01 challenges by publishing and retracting the challenge
//! TXT record through the [hosting.de](https://www.hosting.de/) DNS API.
//!
//! Every operation is a single `POST /zoneUpdate` exchange against
//! `https://secure.hosting.de/api/dns/v1/json`, bounded by a 30 second
//! request timeout. The response's `status` field decides the outcome; any
//! value other than `"success"` is returned as [`ProviderError::ApiError`]
//! together with the request URL and the raw response body.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns01_hostingde::{create_provider, ChallengeProvider, HostingdeCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = HostingdeCredentials::new("api-key", "example.com")?;
//!     let provider = create_provider(credentials)?;
//!
//!     provider.present("example.com", "token", "key-authorization").await?;
//!     // ... let the ACME server validate, polling for up to provider.timeout() ...
//!     provider.clean_up("example.com", "token", "key-authorization").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Lower-level access
//!
//! [`RecordPublisher`] and [`RecordRetractor`] take an explicit record name and
//! value, for callers that derive the challenge record themselves:
//!
//! ```rust,no_run
//! # use dns01_hostingde::*;
//! # async fn example(provider: &HostingdeProvider) -> Result<()> {
//! let zone = ZoneSelector::new("example.com");
//! provider
//!     .publisher()
//!     .publish(&zone, "api-key", "_acme-challenge.example.com.", "value", 120)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::ConfigError`] — missing API key or zone name; no request is sent
//! - [`ProviderError::SerializationError`] — the request body could not be encoded
//! - [`ProviderError::TransportError`] — connect, TLS or timeout failure
//! - [`ProviderError::DecodeError`] — the response is not a JSON response document
//! - [`ProviderError::ApiError`] — the provider answered with a non-`success` status
//!
//! Nothing is retried inside the crate.

mod challenge;
mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{create_provider, create_provider_from_env, create_provider_with_options};

pub use traits::ChallengeProvider;

pub use challenge::{ACME_CHALLENGE_LABEL, DEFAULT_CHALLENGE_TTL, challenge_value, dns01_record};

pub use types::{
    ClientOptions, DEFAULT_API_BASE, Dns01Record, ENV_API_KEY, ENV_ZONE_NAME,
    HostingdeCredentials,
};

pub use providers::{
    EchoedRecord, HostingdeProvider, HostingdeTransport, MutationKind, RecordMutation,
    RecordPublisher, RecordRetractor, RecordType, STATUS_SUCCESS, SoaValues, UpdateEnvelope,
    UpdateOutcome, ZONE_UPDATE_PATH, ZoneConfig, ZoneSelector,
};
