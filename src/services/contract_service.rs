use lazy_static::lazy_static;
use serde_json::{json, Value};
use thiserror::Error;

use crate::api::gateway::{GatewayReply, TransactionRequest};
use crate::models::{BusinessStatus, Expectation, Scenario, Violation};

lazy_static! {
    static ref RESPONSE_SCHEMA: Value = json!({
        "title": "Gateway Transaction Response Schema",
        "type": "object",
        "required": ["command-id", "trans-id", "request-id", "status", "message"],
        "properties": {
            "command-id": { "type": "string" },
            "trans-id": { "type": "string" },
            "request-id": { "type": "string" },
            "status": { "type": "integer" },
            "message": { "type": "string" }
        }
    });
}

const BODY_EXCERPT_CHARS: usize = 60;

#[derive(Debug, Error)]
#[error("Invalid response schema: {0}")]
pub struct SchemaError(String);

/// JSON Schema every business response must satisfy
pub fn response_schema() -> &'static Value {
    &*RESPONSE_SCHEMA
}

/// Validate a body against the response schema, returning one line per error
pub fn validate_schema(body: &Value) -> Result<Vec<String>, SchemaError> {
    let validator = jsonschema::validator_for(response_schema())
        .map_err(|e| SchemaError(e.to_string()))?;

    Ok(validator
        .iter_errors(body)
        .map(|err| {
            let path = err.instance_path.to_string();
            if path.is_empty() {
                err.to_string()
            } else {
                format!("{}: {}", path, err)
            }
        })
        .collect())
}

/// Check a gateway reply against the scenario's expectation.
///
/// Every clause is evaluated; an empty result means the scenario passed.
pub fn check_reply(scenario: &Scenario, reply: &GatewayReply) -> Vec<Violation> {
    match &scenario.expectation {
        Expectation::Transport { http_status } => check_transport(*http_status, reply),
        Expectation::Business { status, message_parts } => {
            check_business(&scenario.body, *status, message_parts, reply)
        }
    }
}

fn body_excerpt(raw: &str) -> String {
    let raw = raw.trim();
    if raw.chars().count() > BODY_EXCERPT_CHARS {
        let mut excerpt: String = raw.chars().take(BODY_EXCERPT_CHARS).collect();
        excerpt.push('…');
        excerpt
    } else {
        raw.to_string()
    }
}

fn check_transport(expected: u16, reply: &GatewayReply) -> Vec<Violation> {
    if reply.http_status == expected {
        Vec::new()
    } else {
        vec![Violation::HttpStatus { expected, actual: reply.http_status }]
    }
}

fn check_business(
    request: &TransactionRequest,
    expected_status: BusinessStatus,
    message_parts: &[String],
    reply: &GatewayReply,
) -> Vec<Violation> {
    let mut violations = check_transport(200, reply);

    let Some(body) = reply.body.as_ref() else {
        violations.push(Violation::NotJson(body_excerpt(&reply.raw)));
        return violations;
    };

    match validate_schema(body) {
        Ok(errors) if errors.is_empty() => {}
        Ok(errors) => violations.push(Violation::Schema(errors)),
        Err(e) => violations.push(Violation::Schema(vec![e.to_string()])),
    }

    // Field checks run on whatever fields are present and well typed; a
    // missing or mistyped field has already been reported by the schema.
    let command = request.command_id;
    if let Some(actual) = body.get("command-id").and_then(Value::as_str) {
        if actual != command.as_str() {
            violations.push(Violation::CommandId {
                expected: command.as_str().to_string(),
                actual: actual.to_string(),
            });
        }
    }

    if let Some(actual) = body.get("request-id").and_then(Value::as_str) {
        if actual != request.request_id {
            violations.push(Violation::RequestId {
                expected: request.request_id.clone(),
                actual: actual.to_string(),
            });
        }
    }

    if let Some(code) = body.get("status").and_then(Value::as_i64) {
        let actual = BusinessStatus::from_code(code);
        if actual != expected_status {
            violations.push(Violation::Status { expected: expected_status, actual });
        }
    }

    if let Some(trans_id) = body.get("trans-id").and_then(Value::as_str) {
        if !command.matches_trans_id(trans_id) {
            violations.push(Violation::TransId {
                pattern: command.trans_id_pattern(),
                actual: trans_id.to_string(),
            });
        }
    }

    if let Some(message) = body.get("message").and_then(Value::as_str) {
        for part in message_parts {
            if !message.contains(part.as_str()) {
                violations.push(Violation::MessageMissing {
                    part: part.clone(),
                    message: message.to_string(),
                });
            }
        }
    }

    violations
}
