//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Plain text lines carry a
/// local timestamp (so poll ticks can be lined up), a shortened target, and
/// colors; hickory's own records are printed muted. JSON emits one object per
/// record for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it for this crate.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=dns_propagation=debug,hickory_resolver=info dns_propagation 192.0.2.10 example.test
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // Unanswered UDP queries are logged as warnings by hickory; the probe
    // already reports them as failed outcomes.
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Error);
    builder.filter_module("dns_propagation", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = serde_json::json!({
                    "ts": chrono::Utc::now().timestamp_millis(),
                    "level": record.level().as_str(),
                    "target": record.target(),
                    "msg": record.args().to_string(),
                });
                writeln!(buf, "{line}")
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let time = chrono::Local::now().format("%H:%M:%S%.3f");
                let source = short_target(record.target());
                if is_resolver_library(record.target()) {
                    // hickory records: muted, no emoji
                    return writeln!(
                        buf,
                        "{} {} [{}] {}",
                        time,
                        source.dimmed(),
                        level,
                        record.args()
                    );
                }

                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };
                let emoji = match level {
                    log::Level::Error => "❌",
                    log::Level::Warn => "⚠️",
                    log::Level::Info => "📡",
                    log::Level::Debug => "🔍",
                    log::Level::Trace => "🔬",
                };

                writeln!(
                    buf,
                    "{} {} {} [{}] {}",
                    time,
                    emoji,
                    source.cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init() so repeated initialization (tests) returns an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

fn is_resolver_library(target: &str) -> bool {
    target.starts_with("hickory_")
}

/// Shortens a log target for plain output.
///
/// `dns_propagation::session::poll` becomes `session::poll`; hickory targets
/// collapse to `hickory`.
fn short_target(target: &str) -> &str {
    if is_resolver_library(target) {
        return "hickory";
    }
    target
        .strip_prefix("dns_propagation::")
        .unwrap_or(target)
}
