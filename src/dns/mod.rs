//! Directed A-record lookups.
//!
//! This module provides the [`AddressLookup`] seam the probe queries through,
//! and its production implementation [`HickoryLookup`], which sends every
//! query to one specific resolver instead of the system configuration.

mod resolution;

use std::net::Ipv4Addr;

use async_trait::async_trait;

use crate::error_handling::LookupError;
use crate::resolvers::ResolverEndpoint;

// Re-export public API
pub use resolution::{directed_resolver_config, directed_resolver_opts, HickoryLookup};

/// Issues an A query for `domain` against a single resolver endpoint.
///
/// Implementations must not fall back to any other resolver: the answer has to
/// reflect `endpoint`'s own view. Timeouts are enforced by the caller, so an
/// implementation may take arbitrarily long.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Returns the IPv4 addresses in the answer, in the order received.
    async fn lookup_ipv4(
        &self,
        endpoint: &ResolverEndpoint,
        domain: &str,
    ) -> Result<Vec<Ipv4Addr>, LookupError>;
}

#[cfg(test)]
mod tests;
