//! Error handling and failure statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, configuration, input, lookup)
//! - Categorization of resolver errors into coarse failure categories
//! - Failure statistics tracking
//!
//! Only configuration and input errors ever reach the caller. Lookup errors
//! are downgraded to unresolved outcomes inside the probe.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_resolve_error, categorize_response_code};
pub use stats::FailureStats;
pub use types::{ConfigError, InitializationError, InputError, LookupError, LookupFailure};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_failure_stats_initialization() {
        let stats = FailureStats::new();
        for failure in LookupFailure::iter() {
            assert_eq!(stats.count(failure), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_failure_stats_increment() {
        let stats = FailureStats::new();
        stats.increment(LookupFailure::Timeout);
        stats.increment(LookupFailure::Timeout);
        stats.increment(LookupFailure::NxDomain);

        assert_eq!(stats.count(LookupFailure::Timeout), 2);
        assert_eq!(stats.count(LookupFailure::NxDomain), 1);
        assert_eq!(stats.count(LookupFailure::Network), 0);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_lookup_failure_display() {
        assert_eq!(LookupFailure::Timeout.to_string(), "timeout");
        assert_eq!(LookupFailure::NxDomain.to_string(), "nxdomain");
        assert_eq!(LookupFailure::NoRecords.to_string(), "no records");
    }

    #[test]
    fn test_lookup_error_display() {
        let error = LookupError::new(LookupFailure::Network, "connection refused");
        assert_eq!(error.to_string(), "network error: connection refused");
        assert_eq!(LookupError::timeout().kind, LookupFailure::Timeout);
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(InputError::EmptyDomain.to_string(), "Domain is empty");
        assert_eq!(
            InputError::InvalidTargetIp("300.1.1.1".into()).to_string(),
            "Invalid IPv4 address: 300.1.1.1"
        );
    }
}
