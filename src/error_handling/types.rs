//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! categories a failed resolver query is reported under.

use log::SetLoggerError;
use serde::Serialize;
use strum_macros::{Display as DisplayMacro, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors in the static configuration (resolver catalog).
///
/// These are fatal at startup: an unusable resolver set is never silently
/// treated as "nothing to check".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The resolver set has no endpoints.
    #[error("Resolver set is empty; at least one resolver is required")]
    EmptyResolverSet,

    /// Two endpoints share the same display name.
    #[error("Duplicate resolver name: {0}")]
    DuplicateResolver(String),

    /// A `NAME=IPV4` resolver specification could not be parsed.
    #[error("Invalid resolver '{0}': expected NAME=IPV4")]
    InvalidResolver(String),
}

/// Errors in the caller-supplied check target.
///
/// Raised before any network activity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The target IP is empty.
    #[error("Target IP address is empty")]
    EmptyTargetIp,

    /// The domain is empty.
    #[error("Domain is empty")]
    EmptyDomain,

    /// The target IP is not a dotted-quad IPv4 address.
    #[error("Invalid IPv4 address: {0}")]
    InvalidTargetIp(String),
}

/// Why a single resolver query did not produce an answer.
///
/// Informational only: every category is downgraded to an unresolved outcome.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIterMacro, DisplayMacro,
)]
#[serde(rename_all = "snake_case")]
pub enum LookupFailure {
    /// The resolver did not answer within the query timeout.
    #[strum(to_string = "timeout")]
    Timeout,
    /// The resolver reported that the name does not exist.
    #[strum(to_string = "nxdomain")]
    NxDomain,
    /// The name exists but has no A records (or the resolver refused to answer).
    #[strum(to_string = "no records")]
    NoRecords,
    /// Socket or protocol level failure talking to the resolver.
    #[strum(to_string = "network error")]
    Network,
    /// Anything else.
    #[strum(to_string = "other error")]
    Other,
}

/// A failed query against one resolver.
#[derive(Error, Debug, Clone)]
#[error("{kind}: {message}")]
pub struct LookupError {
    /// Failure category.
    pub kind: LookupFailure,
    /// Human-readable detail from the underlying resolver.
    pub message: String,
}

impl LookupError {
    /// Creates a lookup error of the given category.
    pub fn new(kind: LookupFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a timeout.
    pub fn timeout() -> Self {
        Self::new(LookupFailure::Timeout, "query timed out")
    }
}
