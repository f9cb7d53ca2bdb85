use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lastfm_wrapped_server::config::{AppConfig, CliConfig, FileConfig};
use lastfm_wrapped_server::lastfm::{LastFm, LastFmClient};
use lastfm_wrapped_server::server::{run_server, RequestsLoggingLevel, ServerConfig};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Values set there override CLI arguments.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Last.fm API key. Falls back to the LASTFM_API_KEY environment variable.
    #[clap(long)]
    pub api_key: Option<String>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Age in seconds of the Cache-Control directive on report responses.
    #[clap(long, default_value_t = 300)]
    pub report_cache_age_sec: usize,

    /// Origin allowed to call the report routes from a browser. Repeatable.
    #[clap(long = "allow-origin")]
    pub allowed_origins: Vec<String>,

    /// Override the upstream Last.fm API base URL.
    #[clap(long)]
    pub upstream_url: Option<String>,

    /// Timeout in seconds for upstream requests.
    #[clap(long, default_value_t = 30)]
    pub upstream_timeout_sec: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };

    // CLI and TOML take precedence over the LASTFM_API_KEY env var.
    let api_key = cli_args
        .api_key
        .or_else(|| std::env::var("LASTFM_API_KEY").ok())
        .filter(|key| !key.is_empty());

    let cli = CliConfig {
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        report_cache_age_sec: cli_args.report_cache_age_sec,
        allowed_origins: cli_args.allowed_origins,
        api_key,
        upstream_url: cli_args.upstream_url,
        upstream_timeout_sec: cli_args.upstream_timeout_sec,
    };
    let config = AppConfig::resolve(&cli, file_config)?;

    info!("Upstream API at {}", config.upstream_url);
    let lastfm: Arc<dyn LastFm> = Arc::new(LastFmClient::new(
        config.upstream_url.clone(),
        config.api_key.clone(),
        config.upstream_timeout_sec,
    )?);

    if config.allowed_origins.is_empty() {
        info!("No allowed origins configured; browser calls will be refused by CORS");
    }

    let server_config = ServerConfig {
        requests_logging_level: config.logging_level.clone(),
        port: config.port,
        report_cache_age_sec: config.report_cache_age_sec,
        allowed_origins: config.allowed_origins.clone(),
    };

    info!("Ready to serve at port {}!", config.port);
    run_server(server_config, lastfm).await
}
