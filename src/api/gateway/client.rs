use std::time::Duration;

use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::{debug, warn};

use super::models::{ApiError, Endpoint, GatewayReply, TransactionRequest};

/// HTTP client for the transaction gateway
pub struct GatewayClient {
    http_client: HttpClient,
    base_url: String,
}

impl GatewayClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8881/Prod_200_AppManagerWildFly21";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a client with custom base URL and request timeout
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::RequestError(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http_client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    fn create_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Classify a non-2xx response
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        match status_code {
            400 => {
                if let Ok(err_json) = serde_json::from_str::<serde_json::Value>(&body_text) {
                    let message = err_json
                        .get("message")
                        .and_then(|v| v.as_str())
                        .unwrap_or(&body_text);
                    ApiError::BadRequest(message.to_string())
                } else {
                    ApiError::BadRequest(body_text)
                }
            }
            401 => ApiError::Unauthorized(body_text),
            403 => ApiError::Forbidden(body_text),
            404 => ApiError::NotFound(body_text),
            500..=599 => {
                warn!("Gateway server error {}: {}", status_code, body_text);
                ApiError::ServerError(status_code, body_text)
            }
            _ => ApiError::HttpError(status_code, body_text),
        }
    }

    /// POST a transaction body to one of the gateway endpoints.
    ///
    /// One attempt only. With `fail_on_status_code` set, a non-2xx answer is
    /// returned as an `ApiError`; otherwise every HTTP status comes back as a
    /// `GatewayReply` so the caller can assert on it.
    pub async fn post_transaction(
        &self,
        endpoint: Endpoint,
        body: &TransactionRequest,
        fail_on_status_code: bool,
    ) -> Result<GatewayReply, ApiError> {
        let url = self.endpoint_url(endpoint);
        debug!(
            "POST {} command={} request_id={}",
            url, body.command_id, body.request_id
        );

        let response = self.http_client
            .post(&url)
            .headers(Self::create_headers())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout(format!("POST {} timed out: {}", url, e))
                } else {
                    ApiError::RequestError(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if fail_on_status_code && !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let raw = response
            .text()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to read response: {}", e)))?;
        debug!("Gateway answered {} ({} bytes)", status.as_u16(), raw.len());

        Ok(GatewayReply::new(status.as_u16(), raw))
    }
}
