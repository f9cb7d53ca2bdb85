//! Last.fm Wrapped Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod config;
pub mod genres;
pub mod lastfm;
pub mod normalize;
pub mod reports;
pub mod server;

// Re-export commonly used types for convenience
pub use config::{AppConfig, CliConfig, FileConfig};
pub use lastfm::{FetchError, LastFm, LastFmClient};
pub use reports::{Period, ReportError};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
