use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

// ============ Challenge Types ============

/// The TXT record that satisfies a DNS-01 challenge.
///
/// Produced by [`dns01_record()`](crate::dns01_record) from the challenge
/// parameters and consumed by the publish/retract operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dns01Record {
    /// Fully-qualified record name with trailing dot (`_acme-challenge.example.com.`).
    pub fqdn: String,
    /// base64url(SHA-256(key authorization)), unpadded.
    pub value: String,
    /// Time-to-live in seconds.
    pub ttl: u32,
}

// ============ Credential Types ============

/// Credentials for the hosting.de DNS API.
///
/// Both fields are required and must be non-empty. They are fixed for the
/// lifetime of a provider instance.
///
/// # Serialization
///
/// ```json
/// { "apiKey": "...", "zoneName": "example.com" }
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostingdeCredentials {
    /// hosting.de API authentication token.
    pub api_key: String,
    /// Name of the zone the challenge records are written into.
    pub zone_name: String,
}

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "HOSTINGDE_API_KEY";
/// Environment variable holding the zone name.
pub const ENV_ZONE_NAME: &str = "HOSTINGDE_ZONE_NAME";

impl HostingdeCredentials {
    /// Build credentials, rejecting empty or whitespace-only fields.
    pub fn new(api_key: impl Into<String>, zone_name: impl Into<String>) -> Result<Self> {
        let credentials = Self {
            api_key: api_key.into(),
            zone_name: zone_name.into(),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Construct credentials from a flat key-value map (`apiKey`, `zoneName`).
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self> {
        Ok(Self {
            api_key: Self::get_required_field(map, "apiKey")?,
            zone_name: Self::get_required_field(map, "zoneName")?,
        })
    }

    /// Read credentials from `HOSTINGDE_API_KEY` and `HOSTINGDE_ZONE_NAME`.
    pub fn from_env() -> Result<Self> {
        let read = |var: &str| {
            std::env::var(var)
                .map_err(|e| ProviderError::config(var, format!("environment variable: {e}")))
        };
        Self::new(read(ENV_API_KEY)?, read(ENV_ZONE_NAME)?)
    }

    /// Check that both fields are present.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::config("apiKey", "API key missing"));
        }
        if self.zone_name.trim().is_empty() {
            return Err(ProviderError::config("zoneName", "zone name missing"));
        }
        Ok(())
    }

    /// Convert credentials to a `HashMap` for flat key-value storage.
    pub fn to_map(&self) -> HashMap<String, String> {
        [
            ("apiKey".to_string(), self.api_key.clone()),
            ("zoneName".to_string(), self.zone_name.clone()),
        ]
        .into()
    }

    /// 从 `HashMap` 获取必填字段并校验非空
    fn get_required_field(map: &HashMap<String, String>, key: &str) -> Result<String> {
        match map.get(key) {
            None => Err(ProviderError::config(key, "missing required field")),
            Some(v) if v.trim().is_empty() => {
                Err(ProviderError::config(key, "field must not be empty"))
            }
            Some(v) => Ok(v.clone()),
        }
    }
}

impl std::fmt::Debug for HostingdeCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostingdeCredentials")
            .field("api_key", &"***")
            .field("zone_name", &self.zone_name)
            .finish()
    }
}

// ============ Client Options ============

/// Default hosting.de JSON API base URL.
pub const DEFAULT_API_BASE: &str = "https://secure.hosting.de/api/dns/v1/json";
/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Transport settings for the HTTP client.
///
/// The defaults target the production API with a 30 second request timeout.
/// Overriding `base_url` is mostly useful for pointing the client at a mock
/// server in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// API base URL; request paths are appended to it.
    pub base_url: String,
    /// Upper bound for one whole request/response exchange.
    pub request_timeout: Duration,
    /// Upper bound for establishing the connection.
    pub connect_timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ClientOptions {
    /// Options pointing at a different API base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Replace the request timeout.
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Replace the connect timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ProviderError::config("baseUrl", "must not be empty"));
        }
        if self.request_timeout.is_zero() {
            return Err(ProviderError::config(
                "requestTimeout",
                "must be greater than zero",
            ));
        }
        if self.connect_timeout.is_zero() {
            return Err(ProviderError::config(
                "connectTimeout",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
