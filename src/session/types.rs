//! Session states, events and the event stream handed to callers.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use serde::Serialize;
use strum_macros::Display as DisplayMacro;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::probe::ProbeResult;

/// Lifecycle of a check session.
///
/// `Idle -> Checking -> Propagated | Cancelled`. A new `start_check` may begin
/// again from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, DisplayMacro)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SessionState {
    /// No check has been started.
    Idle,
    /// A poll loop is running.
    Checking,
    /// Every resolver returned the target IP; polling stopped.
    Propagated,
    /// The caller stopped the check.
    Cancelled,
}

/// What a running check reports to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// One completed tick.
    Probe(ProbeResult),
    /// Sent once, right after the fully propagated `Probe` event.
    Propagated,
}

/// Events of one check, in tick order.
///
/// Ends after `SessionEvent::Propagated` or once the check is cancelled.
/// Dropping the stream stops the check at its next emission.
pub struct EventStream {
    rx: UnboundedReceiver<SessionEvent>,
}

impl EventStream {
    pub(crate) fn new(rx: UnboundedReceiver<SessionEvent>) -> Self {
        Self { rx }
    }

    /// Waits for the next event; `None` once the check has ended.
    pub async fn recv(&mut self) -> Option<SessionEvent> {
        self.rx.recv().await
    }
}

impl Stream for EventStream {
    type Item = SessionEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
