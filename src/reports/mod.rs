//! Report assembly: recent activity, genre cloud, and the wrapped
//! summary. Each assembler is a single-pass, stateless transformation of
//! already-fetched upstream payloads; there is no retry or session state.

pub mod genre_cloud;
pub mod models;
mod period;
pub mod recent;
pub mod wrapped;

pub use period::Period;

use thiserror::Error;

use crate::lastfm::FetchError;

/// Failures surfaced to the HTTP layer.
///
/// Individual upstream call failures are absorbed into empty sentinels
/// long before this point; `Upstream` is reserved for the case where no
/// response can be shaped at all.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("missing required username")]
    MissingInput,

    #[error("upstream unavailable: {0}")]
    Upstream(#[from] FetchError),

    #[error("report assembly failed: {0}")]
    Aggregation(#[from] anyhow::Error),
}
