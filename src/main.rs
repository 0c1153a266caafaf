use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod config;
mod core;
mod display;
mod providers;

#[cfg(test)]
mod test_support;

use crate::app::Application;
use crate::cli::Args;
use crate::config::ProbeConfig;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = match ProbeConfig::load(&args) {
        Ok(config) => config,
        Err(e) => {
            display::report_error(&e);
            return ExitCode::FAILURE;
        }
    };

    // Errors are printed where they happen; only the exit status is left to set.
    match Application::new(config).run().await {
        Ok(report) => {
            tracing::info!(
                generated = %report.generated_text,
                direct = %report.direct,
                "probe finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                transport = e.is_transport(),
                status = e.is_status(),
                "probe failed"
            );
            ExitCode::FAILURE
        }
    }
}
