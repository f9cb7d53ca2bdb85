mod file_config;

pub use file_config::FileConfig;

use crate::lastfm::DEFAULT_API_BASE;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub report_cache_age_sec: usize,
    pub allowed_origins: Vec<String>,
    pub api_key: Option<String>,
    pub upstream_url: Option<String>,
    pub upstream_timeout_sec: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub report_cache_age_sec: usize,
    pub allowed_origins: Vec<String>,
    pub api_key: String,
    pub upstream_url: String,
    pub upstream_timeout_sec: u64,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let api_key = match file.api_key.or_else(|| cli.api_key.clone()) {
            Some(key) if !key.is_empty() => key,
            _ => bail!(
                "Last.fm API key must be specified via --api-key, the config file, \
                 or the LASTFM_API_KEY environment variable"
            ),
        };

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let report_cache_age_sec = file
            .report_cache_age_sec
            .unwrap_or(cli.report_cache_age_sec);

        let allowed_origins = file
            .allowed_origins
            .unwrap_or_else(|| cli.allowed_origins.clone());

        let upstream_url = file
            .upstream_url
            .or_else(|| cli.upstream_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let upstream_timeout_sec = file.upstream_timeout_sec.unwrap_or(cli.upstream_timeout_sec);
        if upstream_timeout_sec == 0 {
            bail!("upstream_timeout_sec must be greater than zero");
        }

        Ok(Self {
            port,
            logging_level,
            report_cache_age_sec,
            allowed_origins,
            api_key,
            upstream_url,
            upstream_timeout_sec,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
