//! Common test infrastructure
//!
//! This module provides everything the end-to-end tests need: a server
//! spawned on a random port and a client for talking to it. The mock
//! upstream serves canned Last.fm payloads, so no test touches the
//! network.

mod client;
mod fixtures;
mod server;

// Public API - this is what tests import
pub use client::TestClient;
pub use server::TestServer;

/// Origin present in every test server's CORS allow-list.
pub const ALLOWED_ORIGIN: &str = "https://reports.example";
