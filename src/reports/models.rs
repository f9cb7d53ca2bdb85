//! Wire-level report shapes. Field names follow the JSON the browser
//! client consumes, hence the camelCase renames.

use serde::Serialize;

use crate::normalize::MonthYear;

/// One recent play.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRecord {
    pub artist: String,
    pub title: String,
    pub album: String,
    pub url: String,
    pub image: String,
    pub now_playing: bool,
    pub date: Option<i64>,
}

/// Highlighted top track, with its best-available image.
#[derive(Debug, Clone, Serialize)]
pub struct TopTrack {
    pub name: String,
    pub artist: String,
    pub playcount: u64,
    pub image: String,
}

/// Entry of the ranked top-tracks list. No image; the client renders
/// these as plain rows.
#[derive(Debug, Clone, Serialize)]
pub struct TopTrackEntry {
    pub name: String,
    pub artist: String,
    pub playcount: u64,
}

impl From<TopTrack> for TopTrackEntry {
    fn from(track: TopTrack) -> Self {
        Self {
            name: track.name,
            artist: track.artist,
            playcount: track.playcount,
        }
    }
}

/// Highlighted top artist.
#[derive(Debug, Clone, Serialize)]
pub struct TopArtist {
    pub name: String,
    pub playcount: u64,
    pub image: String,
}

/// Entry of the ranked top-artists list.
#[derive(Debug, Clone, Serialize)]
pub struct TopArtistEntry {
    pub name: String,
    pub playcount: u64,
}

impl From<TopArtist> for TopArtistEntry {
    fn from(artist: TopArtist) -> Self {
        Self {
            name: artist.name,
            playcount: artist.playcount,
        }
    }
}

/// One genre in a normalized distribution. Weights of a non-empty
/// distribution sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreWeight {
    pub name: String,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct RecentTracksReport {
    pub username: String,
    pub tracks: Vec<TrackRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreCloudReport {
    pub top_genres: Vec<GenreWeight>,
}

/// The periodic roll-up. `since` is populated only for the all-time
/// period; it still serializes as an explicit `null` otherwise because
/// the client reads the key unconditionally.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WrappedReport {
    pub username: String,
    pub period: &'static str,
    pub period_label: &'static str,
    pub since: Option<MonthYear>,
    pub total_scrobbles: u64,
    pub total_artist_count: u64,
    pub top_track: Option<TopTrack>,
    pub top_artist: Option<TopArtist>,
    pub top_genres: Vec<GenreWeight>,
    pub top_tracks: Vec<TopTrackEntry>,
    pub top_artists: Vec<TopArtistEntry>,
}
