use anyhow::Result;
use std::time::{Duration, Instant};

use tracing::debug;

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::{http_cache, log_requests, state::*, ServerConfig};
use crate::reports::{genre_cloud, recent, wrapped, Period, ReportError};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug)]
struct ReportQuery {
    pub username: Option<String>,
    pub period: Option<String>,
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    };
    Json(stats)
}

/// Map the error taxonomy to a status code and a structured body. The
/// body is always complete JSON, never a partially-written report.
fn report_error_response(err: &ReportError) -> Response {
    let (status, code) = match err {
        ReportError::MissingInput => (StatusCode::BAD_REQUEST, "missing_username"),
        ReportError::Upstream(_) => (StatusCode::BAD_GATEWAY, "upstream_unavailable"),
        ReportError::Aggregation(_) => (StatusCode::INTERNAL_SERVER_ERROR, "report_failed"),
    };
    (status, Json(json!({ "error": code }))).into_response()
}

/// The username is the one required input; everything else degrades.
fn require_username(query: &ReportQuery) -> Result<String, ReportError> {
    match &query.username {
        Some(username) if !username.is_empty() => Ok(username.clone()),
        _ => Err(ReportError::MissingInput),
    }
}

async fn get_recent(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let username = match require_username(&query) {
        Ok(username) => username,
        Err(err) => return report_error_response(&err),
    };
    let report = recent::assemble(state.lastfm.as_ref(), &username).await;
    Json(report).into_response()
}

async fn get_wrapped(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let username = match require_username(&query) {
        Ok(username) => username,
        Err(err) => return report_error_response(&err),
    };
    let period = Period::parse_or_default(query.period.as_deref());
    let report = wrapped::assemble(state.lastfm.as_ref(), &username, period).await;
    Json(report).into_response()
}

async fn post_genres(State(state): State<ServerState>, Json(body): Json<Value>) -> Response {
    let seeds = genre_cloud::seeds_from_body(&body);
    debug!("genre cloud requested for {} artists", seeds.len());
    let report = genre_cloud::assemble(state.lastfm.as_ref(), &seeds).await;
    Json(report).into_response()
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn make_app(config: ServerConfig, lastfm: SharedLastFm) -> Router {
    let state = ServerState {
        config: config.clone(),
        start_time: Instant::now(),
        lastfm,
        hash: env!("GIT_HASH").to_string(),
    };

    let report_routes: Router = Router::new()
        .route("/recent", get(get_recent))
        .route("/wrapped", get(get_wrapped))
        .route("/genres", post(post_genres))
        .layer(middleware::from_fn_with_state(
            config.report_cache_age_sec,
            http_cache,
        ))
        .layer(cors_layer(&config.allowed_origins))
        .with_state(state.clone());

    let home_router: Router = Router::new().route("/", get(home)).with_state(state.clone());

    let app: Router = home_router.nest("/v1", report_routes);
    app.layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(config: ServerConfig, lastfm: SharedLastFm) -> Result<()> {
    let port = config.port;
    let app = make_app(config, lastfm);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
