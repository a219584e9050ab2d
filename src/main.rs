//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_propagation` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing summary and exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dns_propagation::initialization::init_logger_with;
use dns_propagation::{exit_code, run_check, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables (e.g. RUST_LOG) from .env if present
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let outcome = run_check(config).await;
    match &outcome {
        Ok(report) if report.propagated => {
            eprintln!(
                "✅ {} resolves to {} on every resolver ({} probe{}, {:.1}s)",
                report.domain,
                report.target_ip,
                report.ticks,
                if report.ticks == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
        }
        Ok(report) => {
            let resolved = report
                .last_result
                .as_ref()
                .map(|r| format!("{}/{}", r.resolved_count(), r.outcomes().len()))
                .unwrap_or_else(|| "no".to_string());
            eprintln!(
                "⏳ {} has not fully propagated to {} ({} resolvers agree{})",
                report.domain,
                report.target_ip,
                resolved,
                report
                    .stop_reason
                    .map(|r| format!(", {r}"))
                    .unwrap_or_default()
            );
        }
        Err(e) => {
            eprintln!("dns_propagation error: {:#}", e);
        }
    }
    process::exit(exit_code(&outcome));
}
