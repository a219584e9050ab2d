//! Probe data types.

use std::net::Ipv4Addr;

use serde::Serialize;

use crate::domain::{normalize_domain, normalize_ipv4};
use crate::error_handling::{InputError, LookupFailure};

/// What to check: the domain and the address it should resolve to.
///
/// Holds the raw caller input; see [`ProbeTarget::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    /// Expected IPv4 address as supplied.
    pub target_ip: String,
    /// Domain as supplied.
    pub domain: String,
}

/// A target whose fields passed validation, in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTarget {
    /// Parsed IPv4 address every resolver is expected to return.
    pub target_ip: Ipv4Addr,
    /// Lowercased domain without a trailing dot.
    pub domain: String,
}

impl ProbeTarget {
    /// Wraps raw user input; nothing is checked until [`ProbeTarget::validate`].
    pub fn new(target_ip: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            target_ip: target_ip.into(),
            domain: domain.into(),
        }
    }

    /// Checks both fields are present and normalizes them.
    ///
    /// The IP is checked first, so a target with both fields empty reports
    /// `EmptyTargetIp`.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` for an empty or malformed IP, or an empty domain.
    pub fn validate(&self) -> Result<ValidatedTarget, InputError> {
        let target_ip = normalize_ipv4(&self.target_ip)?;
        let domain = normalize_domain(&self.domain)?;
        Ok(ValidatedTarget { target_ip, domain })
    }
}

/// One resolver's verdict for one probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolverOutcome {
    /// Name of the resolver this outcome belongs to.
    pub resolver_name: String,
    /// The query succeeded and the target IP is among the answers.
    pub resolved: bool,
    /// First address in the answer, if the query succeeded with any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_ip: Option<Ipv4Addr>,
    /// Why the query failed, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<LookupFailure>,
}

impl ResolverOutcome {
    /// Outcome of a successful query.
    ///
    /// `resolved` is a membership test of `target` against `answers`.
    pub fn from_answers(
        resolver_name: impl Into<String>,
        target: Ipv4Addr,
        answers: &[Ipv4Addr],
    ) -> Self {
        Self {
            resolver_name: resolver_name.into(),
            resolved: answers.contains(&target),
            observed_ip: answers.first().copied(),
            failure: None,
        }
    }

    /// Outcome of a failed query.
    pub fn failed(resolver_name: impl Into<String>, failure: LookupFailure) -> Self {
        Self {
            resolver_name: resolver_name.into(),
            resolved: false,
            observed_ip: None,
            failure: Some(failure),
        }
    }

    /// Outcome for a resolver that was never queried (invalid target).
    pub fn not_queried(resolver_name: impl Into<String>) -> Self {
        Self {
            resolver_name: resolver_name.into(),
            resolved: false,
            observed_ip: None,
            failure: None,
        }
    }
}

/// Aggregate of one probe: one outcome per resolver, in resolver set order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    outcomes: Vec<ResolverOutcome>,
    fully_propagated: bool,
}

impl ProbeResult {
    /// Builds a result; `fully_propagated` is true iff every outcome resolved.
    pub fn from_outcomes(outcomes: Vec<ResolverOutcome>) -> Self {
        let fully_propagated = outcomes.iter().all(|o| o.resolved);
        Self {
            outcomes,
            fully_propagated,
        }
    }

    /// One outcome per resolver, in resolver set order.
    pub fn outcomes(&self) -> &[ResolverOutcome] {
        &self.outcomes
    }

    /// True iff every resolver returned the target IP.
    pub fn fully_propagated(&self) -> bool {
        self.fully_propagated
    }

    /// Outcome of the named resolver.
    pub fn outcome(&self, resolver_name: &str) -> Option<&ResolverOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.resolver_name == resolver_name)
    }

    /// Number of resolvers that already see the target IP.
    pub fn resolved_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.resolved).count()
    }
}
