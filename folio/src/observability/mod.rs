//! Observability module
//!
//! Logging infrastructure for `folio` runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
