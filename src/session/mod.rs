//! Check sessions.
//!
//! A [`CheckSession`] runs at most one poll loop at a time. Each loop probes the
//! resolver set on a fixed interval, streams every [`ProbeResult`] to the
//! caller, and stops by itself once every resolver returns the target IP.
//!
//! ```text
//!            start_check (valid)            fully propagated
//!   Idle ───────────────────────▶ Checking ─────────────────▶ Propagated
//!                                    │  ▲
//!                       cancel_check │  │ not yet: wait interval
//!                                    ▼  │
//!                                 Cancelled
//! ```

mod poll;
mod types;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, info};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::POLL_INTERVAL;
use crate::error_handling::InputError;
use crate::probe::{ProbeResult, ProbeTarget, Prober};

use poll::PollLoop;
pub use types::{EventStream, SessionEvent, SessionState};

/// State shared between a session and its running poll loop.
pub(crate) struct Shared {
    state: SessionState,
    last_result: Option<ProbeResult>,
    cancel: Option<CancellationToken>,
}

/// Locks the shared state; a poisoned lock still holds consistent data.
fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Caller-owned handle for propagation checks.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use dns_propagation::{CheckSession, HickoryLookup, Prober, ResolverSet, SessionEvent};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let timeout = Duration::from_secs(3);
/// let prober = Prober::new(ResolverSet::default(), Arc::new(HickoryLookup::new(timeout)), timeout);
/// let session = CheckSession::new(Arc::new(prober));
///
/// let mut events = session.start_check("192.0.2.10", "example.test").await?;
/// while let Some(event) = events.recv().await {
///     match event {
///         SessionEvent::Probe(result) => println!("{}/5", result.resolved_count()),
///         SessionEvent::Propagated => println!("done"),
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct CheckSession {
    prober: Arc<Prober>,
    interval: Duration,
    shared: Arc<Mutex<Shared>>,
    task: tokio::sync::Mutex<Option<JoinHandle<()>>>,
}

impl CheckSession {
    /// Creates an idle session polling at the default one-second interval.
    pub fn new(prober: Arc<Prober>) -> Self {
        Self::with_interval(prober, POLL_INTERVAL)
    }

    /// Creates an idle session polling at `interval`.
    pub fn with_interval(prober: Arc<Prober>, interval: Duration) -> Self {
        Self {
            prober,
            interval,
            shared: Arc::new(Mutex::new(Shared {
                state: SessionState::Idle,
                last_result: None,
                cancel: None,
            })),
            task: tokio::sync::Mutex::new(None),
        }
    }

    /// Starts polling for `domain` to resolve to `target_ip`.
    ///
    /// Any check already running in this session is stopped, and its task
    /// awaited, before the new one starts, so two loops never overlap.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` for an empty or malformed IP, or an empty domain.
    /// In that case nothing is queried and the session state is unchanged.
    pub async fn start_check(
        &self,
        target_ip: &str,
        domain: &str,
    ) -> Result<EventStream, InputError> {
        let target = ProbeTarget::new(target_ip, domain).validate()?;

        let mut task = self.task.lock().await;
        self.cancel_check();
        if let Some(previous) = task.take() {
            if let Err(e) = previous.await {
                debug!("Previous poll loop ended abnormally: {e}");
            }
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        {
            let mut shared = lock(&self.shared);
            shared.state = SessionState::Checking;
            shared.last_result = None;
            shared.cancel = Some(cancel.clone());
        }

        info!(
            "Checking propagation of {} to {} across {} resolvers",
            target.domain,
            target.target_ip,
            self.prober.resolvers().len()
        );
        let poll_loop = PollLoop {
            prober: Arc::clone(&self.prober),
            target,
            interval: self.interval,
            cancel,
            shared: Arc::clone(&self.shared),
            events: tx,
        };
        *task = Some(tokio::spawn(poll_loop.run()));

        Ok(EventStream::new(rx))
    }

    /// Stops the running check, if any. A no-op when nothing is being checked.
    ///
    /// Once this returns, the stopped check emits nothing more, even if a probe
    /// was in flight.
    pub fn cancel_check(&self) {
        let mut shared = lock(&self.shared);
        if let Some(cancel) = shared.cancel.take() {
            cancel.cancel();
            if shared.state == SessionState::Checking {
                shared.state = SessionState::Cancelled;
                debug!("Check cancelled");
            }
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        lock(&self.shared).state
    }

    /// Whether a poll loop is running.
    pub fn is_checking(&self) -> bool {
        self.state() == SessionState::Checking
    }

    /// Most recent result of the current (or last) check.
    pub fn last_result(&self) -> Option<ProbeResult> {
        lock(&self.shared).last_result.clone()
    }
}

impl Drop for CheckSession {
    fn drop(&mut self) {
        self.cancel_check();
    }
}
