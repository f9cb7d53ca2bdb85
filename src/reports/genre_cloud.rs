//! Genre-cloud report: a normalized genre distribution computed from a
//! posted artist sample, and nothing else.

use serde_json::Value;

use super::models::GenreCloudReport;
use crate::genres::{self, SampledArtist};
use crate::lastfm::LastFm;
use crate::normalize::weight_or_one;

/// Most-played artists sampled from the posted list.
pub const ARTIST_SAMPLE_CAP: usize = 5;

/// Genres kept in the cloud.
pub const GENRE_CAP: usize = 8;

pub async fn assemble(client: &dyn LastFm, seeds: &[SampledArtist]) -> GenreCloudReport {
    GenreCloudReport {
        top_genres: genres::aggregate(client, seeds, ARTIST_SAMPLE_CAP, GENRE_CAP).await,
    }
}

/// Extract the artist sample from a posted body of the form
/// `{ "artists": [{ "name", "playcount" }, …] }`. Nameless entries are
/// dropped; a missing or non-array `artists` field means an empty
/// sample, not an error.
pub fn seeds_from_body(body: &Value) -> Vec<SampledArtist> {
    body["artists"]
        .as_array()
        .map(|artists| {
            artists
                .iter()
                .filter_map(|artist| {
                    let name = artist["name"].as_str().unwrap_or("");
                    if name.is_empty() {
                        return None;
                    }
                    Some(SampledArtist {
                        name: name.to_string(),
                        weight: weight_or_one(&artist["playcount"]),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}
