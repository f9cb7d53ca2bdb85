use axum::extract::FromRef;
use std::sync::Arc;
use std::time::Instant;

use crate::lastfm::LastFm;

use super::ServerConfig;

pub type SharedLastFm = Arc<dyn LastFm>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub lastfm: SharedLastFm,
    pub hash: String,
}

impl FromRef<ServerState> for SharedLastFm {
    fn from_ref(input: &ServerState) -> Self {
        input.lastfm.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
