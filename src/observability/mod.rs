//! Observability module: subscriber setup and log redaction.

pub mod logging;

pub use logging::{redact_sensitive, truncate_body, LogFormat, LogLevel, LoggingConfig};
