//! Lookup failure statistics.
//!
//! Thread-safe counters of failed resolver queries, broken down by
//! [`LookupFailure`] category.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::LookupFailure;

/// Thread-safe lookup failure tracker.
///
/// All categories are initialized to zero on creation, so counters can be
/// incremented from concurrent tasks through a shared reference.
pub struct FailureStats {
    failures: HashMap<LookupFailure, AtomicUsize>,
}

impl FailureStats {
    /// Counters for every failure kind, all at zero.
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for failure in LookupFailure::iter() {
            failures.insert(failure, AtomicUsize::new(0));
        }
        FailureStats { failures }
    }

    /// Increment the counter of a failure category.
    pub fn increment(&self, failure: LookupFailure) {
        if let Some(counter) = self.failures.get(&failure) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map",
                failure
            );
        }
    }

    /// Current count for one category.
    pub fn count(&self, failure: LookupFailure) -> usize {
        self.failures
            .get(&failure)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Sum over all categories.
    pub fn total(&self) -> usize {
        self.failures
            .values()
            .map(|c| c.load(Ordering::Relaxed))
            .sum()
    }
}

impl Default for FailureStats {
    fn default() -> Self {
        Self::new()
    }
}
