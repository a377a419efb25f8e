use crate::models::{ScenarioOutcome, SuiteReport};
use crate::utils::Table;

const DETAIL_WIDTH: usize = 90;

pub const EXIT_PASSED: u8 = 0;
pub const EXIT_FAILED: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;

fn outcome_row(outcome: &ScenarioOutcome) -> Vec<String> {
    let http = outcome
        .http_status
        .map(|code| code.to_string())
        .unwrap_or_else(|| "-".to_string());
    let status = outcome
        .business_status
        .map(|status| status.code().to_string())
        .unwrap_or_else(|| "-".to_string());
    let result = if outcome.passed() { "PASS" } else { "FAIL" };
    let detail = outcome
        .violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ");

    vec![
        outcome.name.clone(),
        http,
        status,
        result.to_string(),
        format!("{}ms", outcome.elapsed.as_millis()),
        detail,
    ]
}

/// Text block for one suite: heading, table, summary line
pub fn render_suite(report: &SuiteReport) -> String {
    let mut table = Table::new(&["Scenario", "HTTP", "Status", "Result", "Time", "Detail"])
        .with_max_width(DETAIL_WIDTH);
    for outcome in &report.outcomes {
        table.add_row(outcome_row(outcome));
    }

    format!(
        "== {} [{}] request-id {}\n{}{} passed, {} failed\n",
        report.suite,
        report.command,
        report.request_id,
        table.render(),
        report.passed_count(),
        report.failed_count()
    )
}

pub fn render_all(reports: &[SuiteReport]) -> String {
    let mut output = String::new();
    for report in reports {
        output.push_str(&render_suite(report));
        output.push('\n');
    }

    let passed: usize = reports.iter().map(SuiteReport::passed_count).sum();
    let failed: usize = reports.iter().map(SuiteReport::failed_count).sum();
    output.push_str(&format!(
        "TOTAL: {} suites, {} scenarios, {} passed, {} failed\n",
        reports.len(),
        passed + failed,
        passed,
        failed
    ));
    output
}

/// Process exit status for a finished run. A run that checked nothing fails.
pub fn exit_status(reports: &[SuiteReport]) -> u8 {
    let scenarios: usize = reports.iter().map(|report| report.outcomes.len()).sum();
    if scenarios > 0 && reports.iter().all(SuiteReport::all_passed) {
        EXIT_PASSED
    } else {
        EXIT_FAILED
    }
}
