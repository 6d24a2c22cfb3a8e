//! stockroom - a small inventory-tracking HTTP service
//!
//! Items are validated, then stored in a single SQLite table through a
//! per-request connection.

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod storage;
pub mod validation;
