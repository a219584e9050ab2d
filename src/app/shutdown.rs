//! Stop conditions for a running check.

use std::time::Duration;

use log::warn;
use strum_macros::Display as DisplayMacro;

/// Why the caller stopped a check before propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayMacro)]
pub enum StopReason {
    /// Ctrl-C was pressed.
    #[strum(to_string = "interrupted")]
    Interrupted,
    /// `--max-duration-secs` elapsed.
    #[strum(to_string = "deadline elapsed")]
    DeadlineElapsed,
}

/// Resolves when the user interrupts the process or `deadline` elapses.
///
/// Without a deadline only Ctrl-C ends the wait.
pub async fn wait_for_stop(deadline: Option<Duration>) -> StopReason {
    let deadline_elapsed = async {
        match deadline {
            Some(d) => tokio::time::sleep(d).await,
            None => std::future::pending::<()>().await,
        }
    };

    let interrupted = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            // Without a signal handler only the deadline can stop the check
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = interrupted => StopReason::Interrupted,
        _ = deadline_elapsed => StopReason::DeadlineElapsed,
    }
}
