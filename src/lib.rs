//! highlights-hub - Sports highlights search
//!
//! This library crate exposes the server, provider client and configuration
//! for the binary and for integration testing.

pub mod client;
pub mod config;
pub mod provider;
pub mod search;
pub mod server;
