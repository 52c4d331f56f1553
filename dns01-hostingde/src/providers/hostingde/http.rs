//! hosting.de HTTP 请求方法

use reqwest::{Client, Method};

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::providers::common::{create_http_client, join_url};
use crate::types::ClientOptions;

use super::{PROVIDER_NAME, UpdateOutcome};

/// Shared transport for all hosting.de calls.
///
/// Holds the pooled `reqwest::Client` and the API base URL. Cloning is cheap
/// and clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct HostingdeTransport {
    client: Client,
    base_url: String,
}

impl HostingdeTransport {
    pub fn new(options: &ClientOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            client: create_http_client(options)?,
            base_url: options.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one request/response exchange and classify the result.
    ///
    /// Fails with `TransportError` if the exchange does not complete within
    /// the request timeout, `DecodeError` if the body is not a response
    /// document and `ApiError` if the document's status is not `success`.
    pub async fn execute(
        &self,
        method: Method,
        relative_path: &str,
        payload: String,
    ) -> Result<UpdateOutcome> {
        let url = join_url(&self.base_url, relative_path);

        let request = self
            .client
            .request(method.clone(), &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload);

        let (http_status, response_text) =
            HttpUtils::execute_request(request, PROVIDER_NAME, method.as_str(), &url).await?;

        let mut outcome: UpdateOutcome = HttpUtils::parse_json(&response_text, PROVIDER_NAME)?;
        outcome.http_status = http_status;
        outcome.raw_body = response_text;

        if !outcome.is_success() {
            log::error!(
                "[{PROVIDER_NAME}] API 错误: status={:?} (HTTP {http_status})",
                outcome.status
            );
            return Err(ProviderError::ApiError {
                provider: PROVIDER_NAME.to_string(),
                url,
                http_status,
                status: outcome.status,
                body: outcome.raw_body,
            });
        }

        Ok(outcome)
    }
}
