use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gateway_e2e::services::{report_service, run_service};
use gateway_e2e::{suites, GatewayClient, GatewayConfig};

const DEFAULT_LOG_FILTER: &str = "gateway_e2e=info,reqwest=warn";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(true)
        .init();

    let config = match GatewayConfig::from_env()
        .and_then(|config| config.with_suites(std::env::args().skip(1)))
    {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ExitCode::from(report_service::EXIT_CONFIG_ERROR);
        }
    };

    info!("Gateway: {}", config.base_url);
    info!("Suites: {}", config.suites.join(", "));

    let client = match GatewayClient::with_base_url(&config.base_url, config.timeout) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create gateway client: {}", e);
            return ExitCode::from(report_service::EXIT_CONFIG_ERROR);
        }
    };

    let selected: Vec<_> = config
        .suites
        .iter()
        .filter_map(|key| suites::build_suite(key))
        .collect();

    let reports = run_service::run_suites(&client, &selected).await;
    println!("{}", report_service::render_all(&reports));

    let status = report_service::exit_status(&reports);
    if status == report_service::EXIT_PASSED {
        info!("All scenarios passed");
    } else {
        error!("Some scenarios failed or none ran");
    }
    ExitCode::from(status)
}
