//! Resolver catalog.
//!
//! A [`ResolverSet`] is the fixed, ordered list of public resolvers a probe
//! queries. It is built once at startup and shared read-only afterwards.

use std::collections::HashSet;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use crate::config::{DEFAULT_RESOLVERS, DNS_PORT};
use crate::error_handling::ConfigError;

/// A named DNS resolver queried directly on port 53.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolverEndpoint {
    /// Display name, unique within a set.
    pub name: String,
    /// The resolver's own address.
    pub address: Ipv4Addr,
}

impl ResolverEndpoint {
    /// Creates an endpoint queried on the standard DNS port.
    pub fn new(name: impl Into<String>, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    /// Socket address the query is sent to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(self.address), DNS_PORT)
    }
}

impl fmt::Display for ResolverEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.address)
    }
}

/// Parses `NAME=IPV4`, e.g. `Google=8.8.8.8`.
impl FromStr for ResolverEndpoint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidResolver(s.to_string());
        let (name, address) = s.split_once('=').ok_or_else(invalid)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid());
        }
        let address = address.trim().parse::<Ipv4Addr>().map_err(|_| invalid())?;
        Ok(Self::new(name, address))
    }
}

/// Ordered, immutable set of resolver endpoints.
///
/// Never empty and free of duplicate names. Cloning is cheap; clones share the
/// same endpoint list.
#[derive(Debug, Clone)]
pub struct ResolverSet {
    endpoints: Arc<[ResolverEndpoint]>,
}

impl ResolverSet {
    /// Builds a resolver set, rejecting empty lists and duplicate names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyResolverSet` or `ConfigError::DuplicateResolver`.
    pub fn new(endpoints: Vec<ResolverEndpoint>) -> Result<Self, ConfigError> {
        if endpoints.is_empty() {
            return Err(ConfigError::EmptyResolverSet);
        }
        let mut seen = HashSet::new();
        for endpoint in &endpoints {
            if !seen.insert(endpoint.name.as_str()) {
                return Err(ConfigError::DuplicateResolver(endpoint.name.clone()));
            }
        }
        Ok(Self {
            endpoints: endpoints.into(),
        })
    }

    /// Endpoints in query and display order.
    pub fn list(&self) -> &[ResolverEndpoint] {
        &self.endpoints
    }

    /// Number of resolvers queried per probe.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Always false for a constructed set; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl Default for ResolverSet {
    /// The reference catalog: Google, Cloudflare, OpenDNS, Quad9, AdGuard.
    fn default() -> Self {
        let endpoints: Vec<ResolverEndpoint> = DEFAULT_RESOLVERS
            .iter()
            .map(|(name, address)| ResolverEndpoint::new(*name, *address))
            .collect();
        Self {
            endpoints: endpoints.into(),
        }
    }
}
