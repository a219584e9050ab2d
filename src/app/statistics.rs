//! Session statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FailureStats, LookupFailure};
use crate::probe::ProbeResult;
use crate::resolvers::ResolverSet;

/// Tallies probes seen by the caller.
///
/// Tracks the number of ticks and, per resolver, the first tick on which it
/// returned the target IP.
#[derive(Debug, Clone)]
pub struct SessionStatistics {
    names: Vec<String>,
    first_resolved: Vec<Option<u64>>,
    ticks: u64,
}

impl SessionStatistics {
    /// Empty statistics for a run over `resolvers`.
    pub fn new(resolvers: &ResolverSet) -> Self {
        Self {
            names: resolvers.list().iter().map(|e| e.name.clone()).collect(),
            first_resolved: vec![None; resolvers.len()],
            ticks: 0,
        }
    }

    /// Records one probe and returns its tick number (1-based).
    pub fn record(&mut self, result: &ProbeResult) -> u64 {
        self.ticks += 1;
        for (slot, outcome) in self.first_resolved.iter_mut().zip(result.outcomes()) {
            if outcome.resolved && slot.is_none() {
                *slot = Some(self.ticks);
            }
        }
        self.ticks
    }

    /// Probes recorded so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// First tick on which `resolver_name` returned the target IP.
    pub fn first_resolved_tick(&self, resolver_name: &str) -> Option<u64> {
        self.names
            .iter()
            .position(|n| n == resolver_name)
            .and_then(|i| self.first_resolved[i])
    }
}

/// Logs per-resolver first-resolved ticks and lookup failure counts.
pub fn print_session_statistics(stats: &SessionStatistics, failures: &FailureStats) {
    info!("Probes run: {}", stats.ticks());
    for (name, first) in stats.names.iter().zip(&stats.first_resolved) {
        match first {
            Some(tick) => info!("  {name}: target IP first seen on tick {tick}"),
            None => info!("  {name}: target IP never seen"),
        }
    }

    let total = failures.total();
    if total > 0 {
        info!("Failed queries: {total}");
        for failure in LookupFailure::iter() {
            let count = failures.count(failure);
            if count > 0 {
                info!("  {failure}: {count}");
            }
        }
    }
}
