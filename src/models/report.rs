//! Outcome models

use std::fmt;
use std::time::Duration;

use crate::models::{BusinessStatus, CommandId};

/// One broken clause of the response contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    HttpStatus { expected: u16, actual: u16 },
    /// No HTTP answer at all (connection refused, timeout, ...)
    Transport(String),
    /// Excerpt of the body that failed to parse
    NotJson(String),
    Schema(Vec<String>),
    CommandId { expected: String, actual: String },
    RequestId { expected: String, actual: String },
    Status { expected: BusinessStatus, actual: BusinessStatus },
    TransId { pattern: String, actual: String },
    MessageMissing { part: String, message: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::HttpStatus { expected, actual } => {
                write!(f, "HTTP status {} (expected {})", actual, expected)
            }
            Violation::Transport(msg) => write!(f, "transport error: {}", msg),
            Violation::NotJson(excerpt) if excerpt.is_empty() => write!(f, "response body is empty"),
            Violation::NotJson(excerpt) => write!(f, "response body is not JSON: {:?}", excerpt),
            Violation::Schema(errors) => write!(f, "schema: {}", errors.join("; ")),
            Violation::CommandId { expected, actual } => {
                write!(f, "command-id {:?} (expected {:?})", actual, expected)
            }
            Violation::RequestId { expected, actual } => {
                write!(f, "request-id {:?} (expected {:?})", actual, expected)
            }
            Violation::Status { expected, actual } => {
                write!(f, "status {} (expected {})", actual, expected)
            }
            Violation::TransId { pattern, actual } => {
                write!(f, "trans-id {:?} does not match {}", actual, pattern)
            }
            Violation::MessageMissing { part, message } => {
                write!(f, "message {:?} does not contain {:?}", message, part)
            }
        }
    }
}

/// Result of running one scenario
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: String,
    pub http_status: Option<u16>,
    pub business_status: Option<BusinessStatus>,
    pub violations: Vec<Violation>,
    pub elapsed: Duration,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Results of one suite, in scenario order
#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub suite: String,
    pub command: CommandId,
    pub request_id: String,
    pub outcomes: Vec<ScenarioOutcome>,
}

impl SuiteReport {
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.passed_count()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(ScenarioOutcome::passed)
    }

    pub fn outcome(&self, name: &str) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}
