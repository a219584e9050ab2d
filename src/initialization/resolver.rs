//! Resolver set and prober initialization.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};

use crate::dns::AddressLookup;
use crate::error_handling::ConfigError;
use crate::probe::Prober;
use crate::resolvers::{ResolverEndpoint, ResolverSet};

/// Builds the resolver set for a run.
///
/// An empty `overrides` slice selects the reference catalog; otherwise the
/// given endpoints replace it entirely.
///
/// # Errors
///
/// Returns `ConfigError::DuplicateResolver` if two overrides share a name.
pub fn init_resolver_set(overrides: &[ResolverEndpoint]) -> Result<ResolverSet, ConfigError> {
    let set = if overrides.is_empty() {
        ResolverSet::default()
    } else {
        ResolverSet::new(overrides.to_vec())?
    };
    for endpoint in set.list() {
        info!("Using resolver {endpoint}");
    }
    Ok(set)
}

/// Creates the shared prober that queries `resolvers` through `lookup`.
///
/// `timeout` is the per-query deadline enforced by the prober, on top of
/// whatever limit the lookup applies itself.
pub fn init_prober(
    resolvers: ResolverSet,
    lookup: Arc<dyn AddressLookup>,
    timeout: Duration,
) -> Arc<Prober> {
    debug!("Per-query timeout: {timeout:?}");
    Arc::new(Prober::new(resolvers, lookup, timeout))
}
