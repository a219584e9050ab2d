//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DNS_TIMEOUT_SECS, POLL_INTERVAL_MS};
use crate::resolvers::ResolverEndpoint;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How each probe result is written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One colored line per resolver
    Plain,
    /// One JSON object per probe
    Json,
}

/// Check configuration.
///
/// Parsed from the command line by the binary, but can be constructed
/// programmatically as well.
///
/// # Examples
///
/// ```no_run
/// use dns_propagation::Config;
///
/// let config = Config {
///     target_ip: "192.0.2.10".to_string(),
///     domain: "example.test".to_string(),
///     once: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dns_propagation",
    version,
    about = "Polls public DNS resolvers until a domain's A record points at the target IP"
)]
pub struct Config {
    /// IPv4 address the domain should resolve to
    #[arg(value_name = "IP")]
    pub target_ip: String,

    /// Domain whose A record is checked
    #[arg(value_name = "DOMAIN")]
    pub domain: String,

    /// Delay between probes in milliseconds
    #[arg(long, default_value_t = POLL_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Per-resolver query timeout in seconds (at least 1)
    #[arg(
        long,
        default_value_t = DNS_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Resolver to query as NAME=IPV4 (repeatable, replaces the built-in set)
    #[arg(long = "resolver", value_name = "NAME=IPV4")]
    pub resolvers: Vec<ResolverEndpoint>,

    /// Run a single probe and exit
    #[arg(long)]
    pub once: bool,

    /// Give up after this many seconds without full propagation
    #[arg(long, value_name = "SECS")]
    pub max_duration_secs: Option<u64>,

    /// Probe output format
    #[arg(long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Do not ring the terminal bell on success
    #[arg(long)]
    pub no_bell: bool,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Config {
    /// Delay between two probes.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Per-resolver query timeout.
    ///
    /// A zero timeout would fail every query, so it is raised to one second.
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Overall deadline, if one was requested.
    pub fn max_duration(&self) -> Option<Duration> {
        self.max_duration_secs.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_ip: String::new(),
            domain: String::new(),
            interval_ms: POLL_INTERVAL_MS,
            timeout_secs: DNS_TIMEOUT_SECS,
            resolvers: Vec::new(),
            once: false,
            max_duration_secs: None,
            output: OutputFormat::Plain,
            no_bell: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
