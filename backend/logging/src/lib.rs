//! Structured logging for TextLens.
//!
//! Handles subscriber setup (console + optional rolling NDJSON file) and
//! redaction of credential material before anything reaches a log line.

pub mod logger;
pub mod redact;

pub use logger::init_logger;
pub use redact::redact_secrets;
