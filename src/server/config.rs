use super::RequestsLoggingLevel;

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    /// Age of the Cache-Control directive attached to report responses.
    pub report_cache_age_sec: usize,
    /// Origins allowed to call the report routes from a browser.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3001,
            report_cache_age_sec: 300,
            allowed_origins: Vec::new(),
        }
    }
}
