//! Single-probe execution.
//!
//! A probe queries every resolver of the set once, concurrently, and folds the
//! answers into a [`ProbeResult`]. Per-resolver failures never escape: they
//! become unresolved outcomes for that resolver only.

mod types;

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, trace};

use crate::dns::AddressLookup;
use crate::error_handling::{FailureStats, LookupError};
use crate::resolvers::{ResolverEndpoint, ResolverSet};

pub use types::{ProbeResult, ProbeTarget, ResolverOutcome, ValidatedTarget};

/// Runs probes against a fixed resolver set.
///
/// Cheap to share behind an `Arc`; holds no per-probe state.
pub struct Prober {
    resolvers: ResolverSet,
    lookup: Arc<dyn AddressLookup>,
    query_timeout: Duration,
    failure_stats: Arc<FailureStats>,
}

impl Prober {
    /// Creates a prober.
    ///
    /// # Arguments
    ///
    /// * `resolvers` - The endpoints every probe queries
    /// * `lookup` - How a single directed query is made
    /// * `query_timeout` - Upper bound for each individual query
    pub fn new(
        resolvers: ResolverSet,
        lookup: Arc<dyn AddressLookup>,
        query_timeout: Duration,
    ) -> Self {
        Self {
            resolvers,
            lookup,
            query_timeout,
            failure_stats: Arc::new(FailureStats::new()),
        }
    }

    /// Resolvers queried by every probe.
    pub fn resolvers(&self) -> &ResolverSet {
        &self.resolvers
    }

    /// Failure counters accumulated over every probe run by this prober.
    pub fn failure_stats(&self) -> &Arc<FailureStats> {
        &self.failure_stats
    }

    /// Queries every resolver for `target` and aggregates the answers.
    ///
    /// Never fails. An invalid target yields all-unresolved outcomes without
    /// touching the network; callers are expected to validate first.
    pub async fn probe(&self, target: &ProbeTarget) -> ProbeResult {
        match target.validate() {
            Ok(validated) => self.probe_validated(&validated).await,
            Err(e) => {
                debug!("Skipping probe for invalid target: {e}");
                ProbeResult::from_outcomes(
                    self.resolvers
                        .list()
                        .iter()
                        .map(|endpoint| ResolverOutcome::not_queried(endpoint.name.clone()))
                        .collect(),
                )
            }
        }
    }

    /// Probe for an already-validated target.
    ///
    /// All queries run concurrently and the probe returns only once each of them
    /// has answered, failed, or timed out. `join_all` keeps outcomes in
    /// resolver set order regardless of completion order.
    pub async fn probe_validated(&self, target: &ValidatedTarget) -> ProbeResult {
        let queries = self
            .resolvers
            .list()
            .iter()
            .map(|endpoint| self.query_one(endpoint, target));
        let outcomes = join_all(queries).await;
        let result = ProbeResult::from_outcomes(outcomes);
        debug!(
            "Probe for {} -> {}: {}/{} resolvers agree",
            target.domain,
            target.target_ip,
            result.resolved_count(),
            self.resolvers.len()
        );
        result
    }

    async fn query_one(
        &self,
        endpoint: &ResolverEndpoint,
        target: &ValidatedTarget,
    ) -> ResolverOutcome {
        let lookup = self.lookup.lookup_ipv4(endpoint, &target.domain);
        let answer = match tokio::time::timeout(self.query_timeout, lookup).await {
            Ok(answer) => answer,
            Err(_) => Err(LookupError::timeout()),
        };
        match answer {
            Ok(addresses) => {
                trace!("{} answered {:?} for {}", endpoint, addresses, target.domain);
                ResolverOutcome::from_answers(endpoint.name.clone(), target.target_ip, &addresses)
            }
            Err(e) => {
                debug!("{} failed for {}: {}", endpoint, target.domain, e);
                self.failure_stats.increment(e.kind);
                ResolverOutcome::failed(endpoint.name.clone(), e.kind)
            }
        }
    }
}
