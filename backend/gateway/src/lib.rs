//! TextLens HTTP gateway: upload page, extraction endpoint, health API.

pub mod extract_api;
pub mod health_api;
pub mod pages;
pub mod server;

pub use server::{build_router, start_server, GatewayState};
