use std::time::Instant;

use tracing::{debug, info, warn};

use crate::api::gateway::GatewayClient;
use crate::models::{BusinessStatus, Scenario, ScenarioOutcome, Suite, SuiteReport, Violation};
use crate::services::contract_service;

/// Send one scenario's request and check the answer. Never fails: transport
/// errors become violations of the outcome.
pub async fn run_scenario(client: &GatewayClient, scenario: &Scenario) -> ScenarioOutcome {
    let started = Instant::now();
    let result = client
        .post_transaction(scenario.endpoint, &scenario.body, scenario.fail_on_status_code)
        .await;
    let elapsed = started.elapsed();

    let outcome = match result {
        Ok(reply) => {
            let violations = contract_service::check_reply(scenario, &reply);
            let business_status = reply
                .body
                .as_ref()
                .and_then(|body| body.get("status"))
                .and_then(|status| status.as_i64())
                .map(BusinessStatus::from_code);
            ScenarioOutcome {
                name: scenario.name.clone(),
                http_status: Some(reply.http_status),
                business_status,
                violations,
                elapsed,
            }
        }
        Err(e) => {
            let violation = match e.status_code() {
                Some(actual) => Violation::HttpStatus {
                    expected: scenario.expectation.http_status(),
                    actual,
                },
                None => Violation::Transport(e.to_string()),
            };
            ScenarioOutcome {
                name: scenario.name.clone(),
                http_status: e.status_code(),
                business_status: None,
                violations: vec![violation],
                elapsed,
            }
        }
    };

    if outcome.passed() {
        debug!("✅ {} ({}ms)", outcome.name, elapsed.as_millis());
    } else {
        for violation in &outcome.violations {
            warn!("❌ {}: {}", outcome.name, violation);
        }
    }

    outcome
}

/// Run every scenario of a suite in order, one request in flight at a time
pub async fn run_suite(client: &GatewayClient, suite: &Suite) -> SuiteReport {
    info!(
        "Running {} [{}] with request-id {} ({} scenarios)",
        suite.name(),
        suite.command,
        suite.request_id,
        suite.scenarios.len()
    );

    let mut outcomes = Vec::with_capacity(suite.scenarios.len());
    for scenario in &suite.scenarios {
        outcomes.push(run_scenario(client, scenario).await);
    }

    let report = SuiteReport {
        suite: suite.name().to_string(),
        command: suite.command,
        request_id: suite.request_id.clone(),
        outcomes,
    };
    info!(
        "{}: {} passed, {} failed",
        report.suite,
        report.passed_count(),
        report.failed_count()
    );
    report
}

pub async fn run_suites(client: &GatewayClient, suites: &[Suite]) -> Vec<SuiteReport> {
    let mut reports = Vec::with_capacity(suites.len());
    for suite in suites {
        reports.push(run_suite(client, suite).await);
    }
    reports
}
