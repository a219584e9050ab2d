//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger
//! - Resolver set (fails fast on a broken catalog)
//! - Prober backed by the hickory resolver

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::{init_prober, init_resolver_set};
