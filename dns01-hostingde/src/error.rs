use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the hosting.de record lifecycle.
///
/// Every failure is returned to the caller as a distinct variant; nothing is
/// retried or swallowed inside this crate. Variants carry plain strings so the
/// error stays `Clone` and can be serialized for structured reporting.
///
/// # Retry policy
///
/// The client never retries. [`TransportError`](Self::TransportError) is the
/// only transient class; whether to call again is the orchestrator's decision.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A required credential or option is missing or invalid.
    ///
    /// Raised during construction, before any network call is attempted.
    #[error("Configuration error: {field}: {detail}")]
    ConfigError {
        /// Machine-readable name of the offending field (e.g. `"apiKey"`).
        field: String,
        /// What is wrong with it.
        detail: String,
    },

    /// The request payload could not be encoded to JSON.
    #[error("[{provider}] Serialization error: {detail}")]
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// A network-level failure (connect, TLS, timeout, reading the body).
    #[error("[{provider}] Transport error calling {url}: {detail}")]
    TransportError {
        /// Provider that produced the error.
        provider: String,
        /// Request URL.
        url: String,
        /// Whether the configured request timeout elapsed.
        timed_out: bool,
        /// Underlying cause.
        detail: String,
    },

    /// The response body was not the expected JSON document.
    #[error("[{provider}] Decode error: {detail}")]
    DecodeError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the decode failure.
        detail: String,
    },

    /// The exchange succeeded but the provider reported a non-`success` status.
    #[error("[{provider}] API error: the request {url} sent the following response: {body}")]
    ApiError {
        /// Provider that produced the error.
        provider: String,
        /// Request URL.
        url: String,
        /// HTTP status code of the response.
        http_status: u16,
        /// Value of the `status` field in the response.
        status: String,
        /// Raw response body text.
        body: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（配置错误、API 拒绝等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::ConfigError { .. } | Self::ApiError { .. })
    }

    /// Whether this is a transport failure caused by the request timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::TransportError {
                timed_out: true,
                ..
            }
        )
    }

    pub(crate) fn config(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::ConfigError {
            field: field.into(),
            detail: detail.into(),
        }
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config_error() {
        let e = ProviderError::config("apiKey", "must not be empty");
        assert_eq!(
            e.to_string(),
            "Configuration error: apiKey: must not be empty"
        );
    }

    #[test]
    fn display_transport_error() {
        let e = ProviderError::TransportError {
            provider: "hostingde".to_string(),
            url: "https://example.test/zoneUpdate".to_string(),
            timed_out: false,
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[hostingde] Transport error calling https://example.test/zoneUpdate: connection refused"
        );
    }

    #[test]
    fn display_api_error_includes_url_and_body() {
        let e = ProviderError::ApiError {
            provider: "hostingde".to_string(),
            url: "https://example.test/zoneUpdate".to_string(),
            http_status: 200,
            status: "error".to_string(),
            body: r#"{"status":"error"}"#.to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("https://example.test/zoneUpdate"));
        assert!(msg.contains(r#"{"status":"error"}"#));
    }

    #[test]
    fn display_decode_error() {
        let e = ProviderError::DecodeError {
            provider: "hostingde".to_string(),
            detail: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[hostingde] Decode error: expected value at line 1 column 1"
        );
    }

    #[test]
    fn display_serialization_error() {
        let e = ProviderError::SerializationError {
            provider: "hostingde".to_string(),
            detail: "failed".to_string(),
        };
        assert_eq!(e.to_string(), "[hostingde] Serialization error: failed");
    }

    #[test]
    fn is_timeout_only_for_timed_out_transport() {
        let timed_out = ProviderError::TransportError {
            provider: "t".into(),
            url: "u".into(),
            timed_out: true,
            detail: "d".into(),
        };
        let refused = ProviderError::TransportError {
            provider: "t".into(),
            url: "u".into(),
            timed_out: false,
            detail: "d".into(),
        };
        assert!(timed_out.is_timeout());
        assert!(!refused.is_timeout());
        assert!(!ProviderError::config("zoneName", "empty").is_timeout());
    }

    #[test]
    fn expected_errors() {
        assert!(ProviderError::config("apiKey", "empty").is_expected());
        assert!(
            !ProviderError::DecodeError {
                provider: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
    }

    #[test]
    fn serialize_is_tagged_by_code() {
        let e = ProviderError::ApiError {
            provider: "hostingde".to_string(),
            url: "u".to_string(),
            http_status: 200,
            status: "error".to_string(),
            body: "b".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"ApiError\""));
        assert!(json.contains("\"http_status\":200"));
    }

    #[test]
    fn deserialize_preserves_display() {
        let original = ProviderError::TransportError {
            provider: "hostingde".to_string(),
            url: "u".to_string(),
            timed_out: true,
            detail: "operation timed out".to_string(),
        };
        let json = serde_json::to_string(&original).unwrap();
        let back: ProviderError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), original.to_string());
        assert!(back.is_timeout());
    }
}
