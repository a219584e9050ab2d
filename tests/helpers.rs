// Shared test helpers: a scripted resolver lookup and prober/session builders.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use dns_propagation::{
    AddressLookup, CheckSession, LookupError, LookupFailure, Prober, ResolverEndpoint,
    ResolverSet,
};

#[allow(dead_code)]
pub const TARGET: Ipv4Addr = Ipv4Addr::new(192, 0, 2, 10);
#[allow(dead_code)]
pub const OTHER: Ipv4Addr = Ipv4Addr::new(203, 0, 113, 5);
#[allow(dead_code)]
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(3);
#[allow(dead_code)]
pub const INTERVAL: Duration = Duration::from_secs(1);

/// How a scripted resolver answers.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Script {
    /// Answer immediately with these addresses.
    Answer(Vec<Ipv4Addr>),
    /// Answer with these addresses after a delay.
    Delayed(Duration, Vec<Ipv4Addr>),
    /// Fail immediately.
    Fail(LookupFailure),
    /// Never answer.
    Hang,
    /// Answer once `ScriptedLookup::release` is called.
    Gated(Vec<Ipv4Addr>),
}

/// Decrements the in-flight counter when a query finishes or is dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// An `AddressLookup` answering from per-resolver scripts.
///
/// Scripts can be swapped while a session runs. Unscripted resolvers fail with
/// `LookupFailure::Other`.
#[derive(Default)]
pub struct ScriptedLookup {
    scripts: Mutex<HashMap<String, Script>>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    gate: Notify,
}

#[allow(dead_code)]
impl ScriptedLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same script for every resolver of the default set.
    pub fn uniform(script: Script) -> Self {
        let lookup = Self::new();
        for endpoint in ResolverSet::default().list() {
            lookup.set(&endpoint.name, script.clone());
        }
        lookup
    }

    pub fn set(&self, resolver_name: &str, script: Script) {
        self.scripts
            .lock()
            .unwrap()
            .insert(resolver_name.to_string(), script);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Lets every query currently waiting on `Script::Gated` answer.
    pub fn release(&self) {
        self.gate.notify_waiters();
    }

    /// Waits (in small virtual-time steps) until at least `n` queries started.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }
}

#[async_trait]
impl AddressLookup for ScriptedLookup {
    async fn lookup_ipv4(
        &self,
        endpoint: &ResolverEndpoint,
        _domain: &str,
    ) -> Result<Vec<Ipv4Addr>, LookupError> {
        let script = self.scripts.lock().unwrap().get(&endpoint.name).cloned();
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        let _guard = InFlight(&self.in_flight);

        match script {
            Some(Script::Answer(addresses)) => Ok(addresses),
            Some(Script::Delayed(delay, addresses)) => {
                tokio::time::sleep(delay).await;
                Ok(addresses)
            }
            Some(Script::Fail(kind)) => Err(LookupError::new(kind, "scripted failure")),
            Some(Script::Hang) => std::future::pending().await,
            Some(Script::Gated(addresses)) => {
                self.gate.notified().await;
                Ok(addresses)
            }
            None => Err(LookupError::new(LookupFailure::Other, "unscripted resolver")),
        }
    }
}

/// Prober over the default resolver set.
#[allow(dead_code)]
pub fn prober(lookup: Arc<ScriptedLookup>) -> Arc<Prober> {
    Arc::new(Prober::new(ResolverSet::default(), lookup, QUERY_TIMEOUT))
}

/// Session over the default resolver set, polling every `INTERVAL`.
#[allow(dead_code)]
pub fn session(lookup: Arc<ScriptedLookup>) -> CheckSession {
    CheckSession::with_interval(prober(lookup), INTERVAL)
}

/// Scripts the five default resolvers in order.
#[allow(dead_code)]
pub fn scripted(scripts: [Script; 5]) -> Arc<ScriptedLookup> {
    let lookup = ScriptedLookup::new();
    for (endpoint, script) in ResolverSet::default().list().iter().zip(scripts) {
        lookup.set(&endpoint.name, script);
    }
    Arc::new(lookup)
}
