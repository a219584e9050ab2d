//! Configuration constants.
//!
//! This module defines the operational defaults used throughout the application:
//! the reference resolver catalog, query timeouts and the polling cadence.

use std::net::Ipv4Addr;
use std::time::Duration;

/// Standard DNS port every resolver endpoint is queried on.
pub const DNS_PORT: u16 = 53;

/// Per-resolver query timeout in seconds.
/// Most public resolvers answer in well under a second; 3s keeps one
/// unreachable resolver from stalling a probe for long.
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Delay between two consecutive probes of a check session.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Lower bound applied to any configured poll interval.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Default poll interval in milliseconds (CLI default, mirrors `POLL_INTERVAL`).
pub const POLL_INTERVAL_MS: u64 = 1000;

/// Reference resolver catalog, in display order.
///
/// Each entry is a public recursive resolver queried directly on port 53.
pub const DEFAULT_RESOLVERS: &[(&str, Ipv4Addr)] = &[
    ("Google", Ipv4Addr::new(8, 8, 8, 8)),
    ("Cloudflare", Ipv4Addr::new(1, 1, 1, 1)),
    ("OpenDNS", Ipv4Addr::new(208, 67, 222, 222)),
    ("Quad9", Ipv4Addr::new(9, 9, 9, 9)),
    ("AdGuard", Ipv4Addr::new(94, 140, 14, 14)),
];

/// Exit code when every resolver returned the target IP.
pub const EXIT_PROPAGATED: i32 = 0;

/// Exit code when the check ended without confirming propagation.
pub const EXIT_NOT_PROPAGATED: i32 = 2;

/// Exit code for invalid input, configuration or initialization failures.
pub const EXIT_ERROR: i32 = 1;
