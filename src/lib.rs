//! dns_propagation library: DNS propagation checking
//!
//! This library checks whether a domain's A record has propagated to a target
//! IPv4 address across a set of independent public resolvers. Each probe
//! queries every resolver concurrently; a check session repeats probes on a
//! fixed interval until every resolver returns the target IP or the caller
//! cancels.
//!
//! # Example
//!
//! ```no_run
//! use dns_propagation::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     target_ip: "192.0.2.10".to_string(),
//!     domain: "example.test".to_string(),
//!     max_duration_secs: Some(600),
//!     ..Default::default()
//! };
//!
//! let report = run_check(config).await?;
//! println!("propagated: {} after {} probes", report.propagated, report.ticks);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod initialization;
pub mod probe;
pub mod resolvers;
pub mod session;

// Re-export public API
pub use app::StopReason;
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use dns::{AddressLookup, HickoryLookup};
pub use error_handling::{ConfigError, InputError, LookupError, LookupFailure};
pub use probe::{ProbeResult, ProbeTarget, Prober, ResolverOutcome};
pub use resolvers::{ResolverEndpoint, ResolverSet};
pub use run::{exit_code, run_check, run_check_with, CheckReport};
pub use session::{CheckSession, EventStream, SessionEvent, SessionState};

// Internal run module (drives one check for the CLI)
mod run {
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::app::{
        format_probe, print_session_statistics, ring_bell, wait_for_stop, SessionStatistics,
        StopReason,
    };
    use crate::config::{Config, EXIT_ERROR, EXIT_NOT_PROPAGATED, EXIT_PROPAGATED};
    use crate::dns::{AddressLookup, HickoryLookup};
    use crate::initialization::{init_prober, init_resolver_set};
    use crate::probe::{ProbeResult, ProbeTarget};
    use crate::session::{CheckSession, SessionEvent, SessionState};

    /// Results of a propagation check.
    #[derive(Debug, Clone)]
    pub struct CheckReport {
        /// Normalized domain that was checked
        pub domain: String,
        /// Normalized target IP
        pub target_ip: std::net::Ipv4Addr,
        /// Every resolver returned the target IP on the last probe
        pub propagated: bool,
        /// Why polling was stopped before propagation, if it was
        pub stop_reason: Option<StopReason>,
        /// Number of probes run
        pub ticks: u64,
        /// Last probe result, if any probe completed
        pub last_result: Option<ProbeResult>,
        /// Whether the terminal bell was rung for success
        pub bell_rung: bool,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl CheckReport {
        /// Process exit status for this report.
        pub fn exit_code(&self) -> i32 {
            if self.propagated {
                EXIT_PROPAGATED
            } else {
                EXIT_NOT_PROPAGATED
            }
        }
    }

    /// Process exit status for the outcome of [`run_check`].
    ///
    /// `0` when propagated, `2` when the check ended without propagation and
    /// `1` for any error.
    pub fn exit_code(outcome: &Result<CheckReport>) -> i32 {
        match outcome {
            Ok(report) => report.exit_code(),
            Err(_) => EXIT_ERROR,
        }
    }

    /// Runs a propagation check with the provided configuration.
    ///
    /// Queries the resolvers through hickory; see [`run_check_with`].
    pub async fn run_check(config: Config) -> Result<CheckReport> {
        let lookup = Arc::new(HickoryLookup::new(config.query_timeout()));
        run_check_with(config, lookup).await
    }

    /// Runs a propagation check, querying resolvers through `lookup`.
    ///
    /// Prints every probe to stdout in the configured format and rings the
    /// terminal bell once on success (unless disabled). With `once` set, a
    /// single probe is run. Otherwise the check polls until propagation,
    /// Ctrl-C, or `max_duration_secs`.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The resolver configuration is invalid (duplicate names)
    /// - The target IP or domain is empty or malformed
    pub async fn run_check_with(
        config: Config,
        lookup: Arc<dyn AddressLookup>,
    ) -> Result<CheckReport> {
        let start = Instant::now();
        let target = ProbeTarget::new(&config.target_ip, &config.domain)
            .validate()
            .context("Invalid check target")?;
        let resolvers =
            init_resolver_set(&config.resolvers).context("Invalid resolver configuration")?;
        let prober = init_prober(resolvers.clone(), lookup, config.query_timeout());
        let mut stats = SessionStatistics::new(&resolvers);
        let mut bell_rung = false;

        let print = |stats: &mut SessionStatistics, result: &ProbeResult| {
            let tick = stats.record(result);
            println!(
                "{}",
                format_probe(result, tick, target.target_ip, config.output)
            );
        };
        let announce = |bell_rung: &mut bool| {
            if !config.no_bell && !*bell_rung {
                ring_bell();
                *bell_rung = true;
            }
        };

        let mut stop_reason = None;
        let (propagated, last_result) = if config.once {
            let result = prober.probe_validated(&target).await;
            print(&mut stats, &result);
            if result.fully_propagated() {
                announce(&mut bell_rung);
            }
            (result.fully_propagated(), Some(result))
        } else {
            let on_event =
                |event: SessionEvent, stats: &mut SessionStatistics, bell_rung: &mut bool| {
                    match event {
                        SessionEvent::Probe(result) => print(stats, &result),
                        SessionEvent::Propagated => announce(bell_rung),
                    }
                };

            let session = CheckSession::with_interval(prober.clone(), config.interval());
            let mut events = session
                .start_check(&config.target_ip, &config.domain)
                .await
                .context("Invalid check target")?;
            let stop = wait_for_stop(config.max_duration());
            tokio::pin!(stop);

            loop {
                tokio::select! {
                    biased;
                    event = events.recv() => match event {
                        Some(event) => on_event(event, &mut stats, &mut bell_rung),
                        None => break,
                    },
                    reason = &mut stop => {
                        warn!("Stopping check: {reason}");
                        session.cancel_check();
                        stop_reason = Some(reason);
                        // Events emitted before the cancel are still reported
                        while let Some(event) = events.recv().await {
                            on_event(event, &mut stats, &mut bell_rung);
                        }
                        break;
                    }
                }
            }
            (
                session.state() == SessionState::Propagated,
                session.last_result(),
            )
        };
        if propagated {
            stop_reason = None;
        }

        print_session_statistics(&stats, prober.failure_stats());
        let elapsed_seconds = start.elapsed().as_secs_f64();
        info!(
            "Check for {} finished after {:.1}s (propagated: {})",
            target.domain, elapsed_seconds, propagated
        );

        Ok(CheckReport {
            domain: target.domain.clone(),
            target_ip: target.target_ip,
            propagated,
            stop_reason,
            ticks: stats.ticks(),
            last_result,
            bell_rung,
            elapsed_seconds,
        })
    }
}
