//! Observability for the inventory service
//!
//! Request handlers and storage emit `tracing` events; this module installs
//! the subscriber that writes them out. Installation happens once, from the
//! CLI, before the server starts.

mod logging;

pub use logging::{init_logging, open_log_file, LoggingConfig, LoggingError};
