//! Presentation helpers used by the command-line front end.
//!
//! This module provides result rendering, the success cue, stop conditions
//! (Ctrl-C, deadline) and session statistics.

pub mod notify;
pub mod render;
pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use notify::ring_bell;
pub use render::format_probe;
pub use shutdown::{wait_for_stop, StopReason};
pub use statistics::{print_session_statistics, SessionStatistics};
