//! Runtime configuration for TextLens.
//!
//! Settings come from environment variables with sensible defaults; the one
//! secret (the Google service-account key) is resolved separately so that it
//! never lands inside the plain settings struct.

pub mod secrets;
pub mod settings;

pub use secrets::resolve_credentials_json;
pub use settings::Settings;
