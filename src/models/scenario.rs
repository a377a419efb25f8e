//! Scenario and suite models

use crate::api::gateway::{Endpoint, TransactionRequest};
use crate::models::{BusinessStatus, CommandId};

/// What a scenario requires of the gateway's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// Only the HTTP status is checked
    Transport { http_status: u16 },
    /// HTTP 200 carrying a business result
    Business {
        status: BusinessStatus,
        message_parts: Vec<String>,
    },
}

impl Expectation {
    pub fn http_status(&self) -> u16 {
        match self {
            Expectation::Transport { http_status } => *http_status,
            Expectation::Business { .. } => 200,
        }
    }
}

/// A single request/response check
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub endpoint: Endpoint,
    pub body: TransactionRequest,
    pub expectation: Expectation,
    /// Whether a non-2xx answer is itself a failure
    pub fail_on_status_code: bool,
}

impl Scenario {
    /// Happy path: status 0 and a message containing `message_part`
    pub fn success(name: &str, body: TransactionRequest, message_part: &str) -> Self {
        Self {
            name: name.to_string(),
            endpoint: Endpoint::Transaction,
            body,
            expectation: Expectation::Business {
                status: BusinessStatus::Success,
                message_parts: vec![message_part.to_string()],
            },
            fail_on_status_code: true,
        }
    }

    /// Business failure reported inside a 200 body
    pub fn failure(name: &str, body: TransactionRequest, status: BusinessStatus) -> Self {
        let message_parts = status
            .failure_message()
            .map(|message| vec![message.to_string()])
            .unwrap_or_default();
        Self {
            name: name.to_string(),
            endpoint: Endpoint::Transaction,
            body,
            expectation: Expectation::Business { status, message_parts },
            fail_on_status_code: false,
        }
    }

    /// POST to the truncated path, expecting 404
    pub fn not_found(name: &str, body: TransactionRequest) -> Self {
        Self {
            name: name.to_string(),
            endpoint: Endpoint::Truncated,
            body,
            expectation: Expectation::Transport { http_status: 404 },
            fail_on_status_code: false,
        }
    }
}

/// All scenarios for one transaction type, sharing one request-id
#[derive(Debug, Clone)]
pub struct Suite {
    pub key: &'static str,
    pub command: CommandId,
    pub request_id: String,
    pub scenarios: Vec<Scenario>,
}

impl Suite {
    pub fn name(&self) -> &'static str {
        self.command.label()
    }
}
