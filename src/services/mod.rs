pub mod contract_service;
pub mod report_service;
pub mod run_service;

pub use run_service::{run_scenario, run_suite, run_suites};
