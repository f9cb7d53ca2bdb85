//! Wrapped summary report.
//!
//! Issues the three core upstream calls concurrently, tolerates each of
//! them failing independently, and folds whatever survives into a single
//! period roll-up: totals, highlighted top track/artist, bounded top
//! lists, member-since, and a genre distribution.

use serde_json::Value;

use super::models::{GenreWeight, TopArtistEntry, TopTrackEntry, WrappedReport};
use super::Period;
use crate::genres::{self, SampledArtist};
use crate::lastfm::{or_empty, LastFm};
use crate::normalize;

/// Upstream fetch sizes. Larger than the display caps so the scrobble
/// sum and the genre sample see more than one screenful of data.
const TOP_TRACKS_FETCH_LIMIT: usize = 50;
const TOP_ARTISTS_FETCH_LIMIT: usize = 50;

/// Display caps.
pub const TOP_TRACKS_CAP: usize = 10;
pub const TOP_ARTISTS_CAP: usize = 5;

/// Genre aggregation bounds for this report.
pub const GENRE_ARTIST_SAMPLE: usize = 8;
pub const GENRE_CAP: usize = 5;

pub async fn assemble(client: &dyn LastFm, username: &str, period: Period) -> WrappedReport {
    let code = period.api_code();

    let (tracks, artists, user) = tokio::join!(
        client.top_tracks(username, code, TOP_TRACKS_FETCH_LIMIT),
        client.top_artists(username, code, TOP_ARTISTS_FETCH_LIMIT),
        client.user_info(username),
    );
    let tracks = or_empty("user.getTopTracks", tracks);
    let artists = or_empty("user.getTopArtists", artists);
    let user = or_empty("user.getInfo", user);

    let genre_sample = artist_sample(&artists);
    let top_genres =
        genres::aggregate(client, &genre_sample, GENRE_ARTIST_SAMPLE, GENRE_CAP).await;

    shape(username, period, &tracks, &artists, &user, top_genres)
}

/// Fold the (possibly empty) payloads into the response shape. Pure and
/// synchronous, which is what the unit tests exercise.
fn shape(
    username: &str,
    period: Period,
    tracks: &Value,
    artists: &Value,
    user: &Value,
    top_genres: Vec<GenreWeight>,
) -> WrappedReport {
    let empty = Vec::new();
    let tracks_arr = tracks["toptracks"]["track"].as_array().unwrap_or(&empty);
    let artists_arr = artists["topartists"]["artist"].as_array().unwrap_or(&empty);

    WrappedReport {
        username: username.to_string(),
        period: period.api_code(),
        period_label: period.label(),
        since: member_since(period, user),
        total_scrobbles: total_scrobbles(period, tracks_arr, user),
        total_artist_count: total_artist_count(artists, artists_arr),
        top_track: tracks_arr.first().map(normalize::top_track),
        top_artist: artists_arr.first().map(normalize::top_artist),
        top_genres,
        top_tracks: tracks_arr
            .iter()
            .take(TOP_TRACKS_CAP)
            .map(|track| TopTrackEntry::from(normalize::top_track(track)))
            .collect(),
        top_artists: artists_arr
            .iter()
            .take(TOP_ARTISTS_CAP)
            .map(|artist| TopArtistEntry::from(normalize::top_artist(artist)))
            .collect(),
    }
}

/// Scrobble total policy. The all-time period prefers the profile's
/// lifetime playcount; every other period has no upstream equivalent, so
/// the bounded top-track sample is summed instead (a known undercount).
fn total_scrobbles(period: Period, tracks_arr: &[Value], user: &Value) -> u64 {
    let summed: u64 = tracks_arr
        .iter()
        .map(|track| normalize::count_or_zero(&track["playcount"]))
        .sum();

    match period {
        Period::Overall => {
            let lifetime = normalize::count_or_zero(&user["user"]["playcount"]);
            if lifetime > 0 {
                lifetime
            } else {
                summed
            }
        }
        _ => summed,
    }
}

/// Distinct-artist total: the upstream-reported result-set total when
/// present, else the number of entries actually returned (an undercount
/// when the set is truncated).
fn total_artist_count(artists: &Value, artists_arr: &[Value]) -> u64 {
    let reported = normalize::count_or_zero(&artists["topartists"]["@attr"]["total"]);
    if reported > 0 {
        reported
    } else {
        artists_arr.len() as u64
    }
}

/// Member-since is meaningful only against the whole listening history.
fn member_since(period: Period, user: &Value) -> Option<normalize::MonthYear> {
    match period {
        Period::Overall => normalize::month_year_from_registered(&user["user"]["registered"]),
        _ => None,
    }
}

/// Artists of the result set, weighted by playcount for the genre
/// aggregation. Playcounts are floored at 1 so an artist with no
/// recorded plays still contributes its tags.
fn artist_sample(artists: &Value) -> Vec<SampledArtist> {
    artists["topartists"]["artist"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|artist| {
                    let name = artist["name"].as_str().unwrap_or("");
                    if name.is_empty() {
                        return None;
                    }
                    Some(SampledArtist {
                        name: name.to_string(),
                        weight: normalize::count_or_zero(&artist["playcount"]).max(1) as f64,
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}
