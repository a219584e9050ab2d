//! The poll loop driving one check.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{debug, info};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::types::{SessionEvent, SessionState};
use super::{lock, Shared};
use crate::config::MIN_POLL_INTERVAL;
use crate::probe::{ProbeResult, Prober, ValidatedTarget};

enum Emission {
    Continue,
    Stop,
}

/// Everything one poll loop owns.
pub(super) struct PollLoop {
    pub(super) prober: Arc<Prober>,
    pub(super) target: ValidatedTarget,
    pub(super) interval: Duration,
    pub(super) cancel: CancellationToken,
    pub(super) shared: Arc<Mutex<Shared>>,
    pub(super) events: UnboundedSender<SessionEvent>,
}

impl PollLoop {
    /// Probes until full propagation or cancellation.
    ///
    /// Ticks are strictly sequential: the next probe is only started once the
    /// previous one has been emitted. Both the interval wait and an in-flight
    /// probe are abandoned as soon as the token is cancelled.
    pub(super) async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval.max(MIN_POLL_INTERVAL));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut tick: u64 = 0;

        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }
            tick += 1;

            let result = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                result = self.prober.probe_validated(&self.target) => result,
            };
            debug!(
                "Tick {tick} for {}: {}/{} resolvers return {}",
                self.target.domain,
                result.resolved_count(),
                result.outcomes().len(),
                self.target.target_ip
            );

            match self.emit(result) {
                Emission::Continue => {}
                Emission::Stop => break,
            }
        }
        debug!("Poll loop for {} stopped after {tick} ticks", self.target.domain);
    }

    /// Publishes one probe result.
    ///
    /// Runs under the session lock and re-checks the token there, so nothing is
    /// emitted once `cancel_check` has returned.
    fn emit(&self, result: ProbeResult) -> Emission {
        let mut shared = lock(&self.shared);
        if self.cancel.is_cancelled() {
            return Emission::Stop;
        }

        let propagated = result.fully_propagated();
        shared.last_result = Some(result.clone());
        if self.events.send(SessionEvent::Probe(result)).is_err() {
            debug!("Event stream dropped, stopping check for {}", self.target.domain);
            shared.state = SessionState::Cancelled;
            shared.cancel = None;
            self.cancel.cancel();
            return Emission::Stop;
        }

        if propagated {
            info!(
                "{} has propagated to {} on all resolvers",
                self.target.domain, self.target.target_ip
            );
            shared.state = SessionState::Propagated;
            shared.cancel = None;
            let _ = self.events.send(SessionEvent::Propagated);
            return Emission::Stop;
        }
        Emission::Continue
    }
}
