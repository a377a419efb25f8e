//! Data models for the gateway checks
//!
//! Transaction types and business codes, the scenarios built from them, and
//! the outcomes produced by running those scenarios. Wire request/response
//! structs live next to the HTTP client in `api::gateway`.

pub mod command;
pub mod status;
pub mod scenario;
pub mod report;

pub use command::CommandId;
pub use status::BusinessStatus;
pub use scenario::{Expectation, Scenario, Suite};
pub use report::{ScenarioOutcome, SuiteReport, Violation};
