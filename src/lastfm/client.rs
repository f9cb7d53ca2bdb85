use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_API_BASE: &str = "https://ws.audioscrobbler.com/2.0/";

/// Ways a single upstream call can fail. All of them degrade to the
/// empty-object sentinel at the aggregation boundary; the distinction
/// only matters for logging and for callers that want to surface a
/// transport problem directly.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("empty response body")]
    EmptyBody,

    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("upstream error {code}: {message}")]
    Upstream { code: i64, message: String },
}

/// Read-only slice of the Last.fm API consumed by the report assemblers.
///
/// The server holds this as a trait object so the e2e suite can swap in
/// a canned mock without any network.
#[async_trait]
pub trait LastFm: Send + Sync {
    async fn recent_tracks(&self, user: &str, limit: usize) -> Result<Value, FetchError>;
    async fn top_tracks(&self, user: &str, period: &str, limit: usize)
        -> Result<Value, FetchError>;
    async fn top_artists(
        &self,
        user: &str,
        period: &str,
        limit: usize,
    ) -> Result<Value, FetchError>;
    async fn user_info(&self, user: &str) -> Result<Value, FetchError>;
    async fn artist_top_tags(&self, artist: &str) -> Result<Value, FetchError>;
}

/// HTTP client for the Last.fm web API.
pub struct LastFmClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LastFmClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - API base, normally [`DEFAULT_API_BASE`]
    /// * `api_key` - credential appended to every call
    /// * `timeout_sec` - request timeout in seconds
    pub fn new(base_url: String, api_key: String, timeout_sec: u64) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()?;

        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, query: &str) -> String {
        format!(
            "{}/?{}&api_key={}&format=json",
            self.base_url, query, self.api_key
        )
    }

    /// Issue one call and apply the tolerant-parse rules. The HTTP status
    /// is deliberately not checked: Last.fm reports logical errors in an
    /// `error` field, usually with status 200.
    async fn fetch(&self, query: &str) -> Result<Value, FetchError> {
        let response = self.client.get(self.url(query)).send().await?;
        let body = response.text().await?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }
        let payload: Value = serde_json::from_str(&body)?;
        if let Some(code) = payload.get("error") {
            return Err(FetchError::Upstream {
                code: code.as_i64().unwrap_or(0),
                message: payload["message"].as_str().unwrap_or("").to_string(),
            });
        }
        Ok(payload)
    }
}

#[async_trait]
impl LastFm for LastFmClient {
    async fn recent_tracks(&self, user: &str, limit: usize) -> Result<Value, FetchError> {
        self.fetch(&format!(
            "method=user.getrecenttracks&user={}&limit={}&extended=1",
            urlencoding::encode(user),
            limit
        ))
        .await
    }

    async fn top_tracks(
        &self,
        user: &str,
        period: &str,
        limit: usize,
    ) -> Result<Value, FetchError> {
        self.fetch(&format!(
            "method=user.getTopTracks&user={}&period={}&limit={}",
            urlencoding::encode(user),
            period,
            limit
        ))
        .await
    }

    async fn top_artists(
        &self,
        user: &str,
        period: &str,
        limit: usize,
    ) -> Result<Value, FetchError> {
        self.fetch(&format!(
            "method=user.getTopArtists&user={}&period={}&limit={}",
            urlencoding::encode(user),
            period,
            limit
        ))
        .await
    }

    async fn user_info(&self, user: &str) -> Result<Value, FetchError> {
        self.fetch(&format!(
            "method=user.getInfo&user={}",
            urlencoding::encode(user)
        ))
        .await
    }

    async fn artist_top_tags(&self, artist: &str) -> Result<Value, FetchError> {
        self.fetch(&format!(
            "method=artist.getTopTags&artist={}",
            urlencoding::encode(artist)
        ))
        .await
    }
}

/// Collapse a per-call failure to the empty-object sentinel. The failure
/// is logged and that slice of the report degrades to "no data"; it never
/// aborts the aggregation.
pub fn or_empty(method: &str, result: Result<Value, FetchError>) -> Value {
    match result {
        Ok(payload) => payload,
        Err(err) => {
            warn!("{} degraded to empty payload: {}", method, err);
            json!({})
        }
    }
}
