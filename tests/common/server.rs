//! Test server lifecycle management
//!
//! Each test gets an isolated server on a random port, backed by a mock
//! upstream serving canned payloads.

use async_trait::async_trait;
use lastfm_wrapped_server::lastfm::{FetchError, LastFm};
use lastfm_wrapped_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use serde_json::Value;
use std::sync::Arc;

use super::fixtures;
use super::ALLOWED_ORIGIN;

/// Mock upstream for testing - serves fixture payloads, no network.
/// With `fail_all` set, every call reports an empty body, which is how
/// the degraded-report paths are exercised.
pub struct MockLastFm {
    fail_all: bool,
}

#[async_trait]
impl LastFm for MockLastFm {
    async fn recent_tracks(&self, _user: &str, _limit: usize) -> Result<Value, FetchError> {
        if self.fail_all {
            return Err(FetchError::EmptyBody);
        }
        Ok(fixtures::recent_tracks())
    }

    async fn top_tracks(
        &self,
        _user: &str,
        _period: &str,
        _limit: usize,
    ) -> Result<Value, FetchError> {
        if self.fail_all {
            return Err(FetchError::EmptyBody);
        }
        Ok(fixtures::top_tracks())
    }

    async fn top_artists(
        &self,
        _user: &str,
        _period: &str,
        _limit: usize,
    ) -> Result<Value, FetchError> {
        if self.fail_all {
            return Err(FetchError::EmptyBody);
        }
        Ok(fixtures::top_artists())
    }

    async fn user_info(&self, _user: &str) -> Result<Value, FetchError> {
        if self.fail_all {
            return Err(FetchError::EmptyBody);
        }
        Ok(fixtures::user_info())
    }

    async fn artist_top_tags(&self, artist: &str) -> Result<Value, FetchError> {
        if self.fail_all {
            return Err(FetchError::EmptyBody);
        }
        Ok(fixtures::artist_top_tags(artist))
    }
}

/// Test server instance bound to a random port
///
/// When dropped, the server gracefully shuts down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    // Private - keep the shutdown channel alive until drop
    _shutdown_tx: tokio::sync::oneshot::Sender<()>,
}

impl TestServer {
    /// Spawns a server whose upstream answers with the canned fixtures.
    pub async fn spawn() -> Self {
        Self::spawn_with(MockLastFm { fail_all: false }).await
    }

    /// Spawns a server whose upstream fails every call.
    pub async fn spawn_failing_upstream() -> Self {
        Self::spawn_with(MockLastFm { fail_all: true }).await
    }

    async fn spawn_with(mock: MockLastFm) -> Self {
        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            port: 0,
            report_cache_age_sec: 300,
            allowed_origins: vec![ALLOWED_ORIGIN.to_string()],
        };
        let app = make_app(config, Arc::new(mock));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test port");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .ok();
        });

        Self {
            base_url: format!("http://{}", addr),
            port: addr.port(),
            _shutdown_tx: shutdown_tx,
        }
    }
}
