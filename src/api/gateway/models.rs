use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::models::CommandId;

/// Gateway paths exercised by the suites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// POST /gateway/transaction
    Transaction,
    /// POST /gateway (missing the `/transaction` suffix, answers 404)
    Truncated,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Transaction => "/gateway/transaction",
            Endpoint::Truncated => "/gateway",
        }
    }
}

/// Command-specific key/value pairs sent under `extended-data`.
///
/// Keys keep the order they were inserted in, so the body on the wire reads
/// the same way as the fixture that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtendedData {
    entries: Vec<(String, String)>,
}

impl ExtendedData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from literal pairs
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut data = Self::new();
        for (key, value) in pairs {
            data.set(key, value);
        }
        data
    }

    /// Insert or overwrite a key, keeping its original position
    pub fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for ExtendedData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Request body for POST /gateway/transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TransactionRequest {
    pub request_id: String,
    pub command_id: CommandId,
    pub sender: String,
    pub destination: String,
    pub auth: String,
    pub amount: String,
    pub remarks: String,
    pub extended_data: ExtendedData,
}

impl TransactionRequest {
    pub fn with_sender(&self, sender: &str) -> Self {
        Self { sender: sender.to_string(), ..self.clone() }
    }

    pub fn with_destination(&self, destination: &str) -> Self {
        Self { destination: destination.to_string(), ..self.clone() }
    }

    pub fn with_auth(&self, auth: &str) -> Self {
        Self { auth: auth.to_string(), ..self.clone() }
    }

    pub fn with_amount(&self, amount: &str) -> Self {
        Self { amount: amount.to_string(), ..self.clone() }
    }

    /// Copy of this request with one `extended-data` key overridden
    pub fn with_extended(&self, key: &str, value: &str) -> Self {
        let mut request = self.clone();
        request.extended_data.set(key, value);
        request
    }
}

/// Response body returned by the gateway for every business outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TransactionResponse {
    pub command_id: String,
    pub trans_id: String,
    pub request_id: String,
    pub status: i64,
    pub message: String,
}

/// Raw reply from the gateway: HTTP status plus whatever body came back
#[derive(Debug, Clone)]
pub struct GatewayReply {
    pub http_status: u16,
    pub raw: String,
    /// Body parsed as JSON; `None` when empty or not JSON
    pub body: Option<Value>,
}

impl GatewayReply {
    pub fn new(http_status: u16, raw: String) -> Self {
        let body = if raw.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&raw).ok()
        };
        Self { http_status, raw, body }
    }

    /// Decode the body into the typed response
    pub fn response(&self) -> Result<TransactionResponse, ApiError> {
        let body = self
            .body
            .clone()
            .ok_or_else(|| ApiError::DeserializationError("Response body is not JSON".to_string()))?;
        serde_json::from_value(body)
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }
}

/// Errors raised while talking to the gateway
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    #[error("Timed out: {0}")]
    Timeout(String),
    #[error("Request Error: {0}")]
    RequestError(String),
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the gateway answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest(_) => Some(400),
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::ServerError(code, _) | ApiError::HttpError(code, _) => Some(*code),
            ApiError::Timeout(_) | ApiError::RequestError(_) | ApiError::DeserializationError(_) => None,
        }
    }
}
