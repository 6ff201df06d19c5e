//! apiprobe - portfolio backend contract verifier
//!
//! Runs the fixed scenario suite against the configured base URL and
//! exits 0 only when every scenario passes. Diagnostics go to stderr via
//! tracing; the verification report itself is plain stdout.

use std::process::ExitCode;

use apiprobe_application::run_suite;
use apiprobe_infrastructure::{ConsoleReporter, ReqwestHttpClient};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod config;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let target = match config::target_from_env() {
        Ok(target) => target,
        Err(error) => {
            tracing::error!(%error, "invalid base URL configuration");
            return ExitCode::FAILURE;
        }
    };

    let client = match ReqwestHttpClient::new() {
        Ok(client) => client,
        Err(error) => {
            tracing::error!(%error, "failed to construct HTTP client");
            return ExitCode::FAILURE;
        }
    };

    let reporter = ConsoleReporter::new();
    let report = run_suite(&client, &target, &reporter).await;

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
