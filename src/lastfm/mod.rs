//! Last.fm web API client.
//!
//! Every method returns the raw JSON payload for one upstream call. A
//! call that fails in any way (transport, empty body, malformed JSON, or
//! an in-band `error` field) reports a [`FetchError`], and the
//! aggregation boundary collapses it to an empty-object sentinel via
//! [`or_empty`] so downstream code has a single "absent" case to handle.

mod client;

pub use client::{or_empty, FetchError, LastFm, LastFmClient, DEFAULT_API_BASE};
