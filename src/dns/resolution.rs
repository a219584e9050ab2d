//! Resolver construction and A lookups using `hickory-resolver`.

use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use super::AddressLookup;
use crate::config::{DNS_PORT, DNS_TIMEOUT_SECS};
use crate::domain::to_fqdn;
use crate::error_handling::LookupError;
use crate::resolvers::ResolverEndpoint;

/// Resolver configuration naming `endpoint` as the only upstream.
///
/// Both UDP and TCP are registered for the endpoint so truncated UDP answers
/// are retried over TCP. No search domains are set.
pub fn directed_resolver_config(endpoint: &ResolverEndpoint) -> ResolverConfig {
    let name_servers =
        NameServerConfigGroup::from_ips_clear(&[IpAddr::V4(endpoint.address)], DNS_PORT, true);
    ResolverConfig::from_parts(None, Vec::new(), name_servers)
}

/// Resolver options for propagation checks.
///
/// A single attempt per query (no hidden retries), no hosts file, and no answer
/// cache, so every probe sees the resolver's current answer.
pub fn directed_resolver_opts(timeout: Duration) -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = 1;
    opts.ndots = 0;
    opts.use_hosts_file = false;
    opts.cache_size = 0;
    opts
}

/// Production [`AddressLookup`] backed by hickory.
///
/// A fresh resolver is built per query; construction does no I/O and keeps
/// queries of different endpoints and ticks fully independent.
#[derive(Debug, Clone)]
pub struct HickoryLookup {
    timeout: Duration,
}

impl HickoryLookup {
    /// Creates a lookup whose resolvers give up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn resolver_for(&self, endpoint: &ResolverEndpoint) -> TokioAsyncResolver {
        TokioAsyncResolver::tokio(
            directed_resolver_config(endpoint),
            directed_resolver_opts(self.timeout),
        )
    }
}

impl Default for HickoryLookup {
    fn default() -> Self {
        Self::new(Duration::from_secs(DNS_TIMEOUT_SECS))
    }
}

#[async_trait]
impl AddressLookup for HickoryLookup {
    async fn lookup_ipv4(
        &self,
        endpoint: &ResolverEndpoint,
        domain: &str,
    ) -> Result<Vec<Ipv4Addr>, LookupError> {
        let resolver = self.resolver_for(endpoint);
        let response = resolver.ipv4_lookup(to_fqdn(domain)).await?;
        Ok(response.iter().map(|a| a.0).collect())
    }
}
