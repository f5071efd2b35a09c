//! Google Cloud Vision client for TextLens.
//!
//! Covers the two external collaborators the extraction flow leans on: the
//! OAuth2 JWT-bearer handshake for service accounts and the `images:annotate`
//! text-detection call itself.

pub mod client;
pub mod credentials;
pub mod token;
pub mod wire;

pub use client::VisionClient;
pub use credentials::ServiceAccountKey;
pub use token::Authenticator;
