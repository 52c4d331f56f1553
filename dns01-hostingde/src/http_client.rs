//! Generic HTTP client tools
//!
//! Shared request/response handling for the provider transport: sending the
//! request, logging, buffering the body and JSON decoding.
//!
//! # design principles
//! - **One exchange per call** - no retries; the caller owns retry policy
//! - **Always drain the body** - the response is read to the end on every path
//!   so the pooled connection can be reused
//! - **HTTP status is informational** - the provider signals failure in the
//!   JSON document, so non-2xx codes are passed through to the caller

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `provider_name` - Provider name (for logging and errors)
    /// * `method_name` - HTTP method (for logging)
    /// * `url` - full request URL (for logging and errors)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - the full response was received
    /// * `Err(ProviderError::TransportError)` - connect/TLS/timeout/body read failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| transport_error(provider_name, url, &e))?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        // text() consumes the response, releasing the connection either way
        let response_text = response
            .text()
            .await
            .map_err(|e| transport_error(provider_name, url, &e))?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::DecodeError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::DecodeError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

fn transport_error(provider_name: &str, url: &str, e: &reqwest::Error) -> ProviderError {
    let timed_out = e.is_timeout();
    if timed_out {
        log::warn!("[{provider_name}] Request to {url} timed out");
    }
    ProviderError::TransportError {
        provider: provider_name.to_string(),
        url: url.to_string(),
        timed_out,
        detail: e.to_string(),
    }
}
