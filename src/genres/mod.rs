//! Weighted genre aggregation.
//!
//! Combines per-artist tag lists into a single normalized genre
//! distribution for a user:
//!
//! ```text
//! artist sample → artist.getTopTags fan-out → top 5 tags per artist
//!              → score = tag count × artist weight, accumulated by name
//!              → rank, truncate, normalize over the kept scores
//! ```

use futures::future::join_all;
use serde_json::Value;
use tracing::warn;

use crate::lastfm::LastFm;
use crate::normalize::weight_or_one;
use crate::reports::models::GenreWeight;

/// Tags considered per artist; anything below the fold is noise.
const TAGS_PER_ARTIST: usize = 5;

/// One artist of the sample the distribution is computed from. The
/// weight is the artist's playcount, floored at 1 so a tag list from an
/// artist with no recorded plays still contributes.
#[derive(Debug, Clone)]
pub struct SampledArtist {
    pub name: String,
    pub weight: f64,
}

/// Score accumulator keyed by tag name. Vec-backed so equal scores keep
/// their first-encountered order when ranked; a hash map would make the
/// ordering of ties differ from run to run.
#[derive(Default)]
struct TagScores(Vec<(String, f64)>);

impl TagScores {
    fn bump(&mut self, name: String, score: f64) {
        match self.0.iter_mut().find(|(tag, _)| *tag == name) {
            Some((_, total)) => *total += score,
            None => self.0.push((name, score)),
        }
    }

    /// Rank by score descending, keep the top `cap`, and normalize each
    /// kept score by the sum of the kept scores, so the returned weights
    /// sum to 1 across the truncated set.
    fn into_ranked(self, cap: usize) -> Vec<GenreWeight> {
        let mut entries = self.0;
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries.truncate(cap);

        let total: f64 = entries.iter().map(|(_, score)| score).sum();
        let total = if total > 0.0 { total } else { 1.0 };

        entries
            .into_iter()
            .map(|(name, score)| GenreWeight {
                name,
                weight: score / total,
            })
            .collect()
    }
}

/// Accumulate one artist's tag payload into the running scores.
fn accumulate(scores: &mut TagScores, payload: &Value, artist_weight: f64) {
    let tags = match payload["toptags"]["tag"].as_array() {
        Some(tags) => tags,
        None => return,
    };
    for tag in tags.iter().take(TAGS_PER_ARTIST) {
        let name = tag["name"].as_str().unwrap_or("").to_lowercase();
        if name.is_empty() {
            continue;
        }
        scores.bump(name, weight_or_one(&tag["count"]) * artist_weight);
    }
}

/// Produce a ranked, normalized genre distribution for a sample of
/// artists.
///
/// At most `artist_cap` artists are queried, concurrently; a failed tag
/// fetch drops that artist's contribution without cancelling the others.
/// The result holds at most `cap` genres and is empty when no tags
/// resolve at all.
pub async fn aggregate(
    client: &dyn LastFm,
    artists: &[SampledArtist],
    artist_cap: usize,
    cap: usize,
) -> Vec<GenreWeight> {
    let sample = &artists[..artists.len().min(artist_cap)];

    let fetches = sample.iter().map(|artist| async move {
        match client.artist_top_tags(&artist.name).await {
            Ok(payload) => Some((artist.weight, payload)),
            Err(err) => {
                warn!("top tags for '{}' skipped: {}", artist.name, err);
                None
            }
        }
    });
    let payloads = join_all(fetches).await;

    let mut scores = TagScores::default();
    for (weight, payload) in payloads.into_iter().flatten() {
        accumulate(&mut scores, &payload, weight);
    }
    scores.into_ranked(cap)
}
