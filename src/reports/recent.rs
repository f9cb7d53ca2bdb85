//! Recent-activity report: the latest plays, one record per entry, no
//! aggregation beyond per-item mapping.

use serde_json::Value;

use super::models::{RecentTracksReport, TrackRecord};
use crate::lastfm::{or_empty, LastFm};
use crate::normalize;

/// Plays shown on the recent-activity view.
pub const RECENT_TRACKS_LIMIT: usize = 20;

pub async fn assemble(client: &dyn LastFm, username: &str) -> RecentTracksReport {
    let payload = or_empty(
        "user.getrecenttracks",
        client.recent_tracks(username, RECENT_TRACKS_LIMIT).await,
    );

    RecentTracksReport {
        username: username.to_string(),
        tracks: tracks_of(&payload),
    }
}

fn tracks_of(payload: &Value) -> Vec<TrackRecord> {
    payload["recenttracks"]["track"]
        .as_array()
        .map(|tracks| {
            tracks
                .iter()
                .take(RECENT_TRACKS_LIMIT)
                .map(normalize::track_record)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tracks_of_maps_entries() {
        let payload = json!({ "recenttracks": { "track": [
            {
                "name": "Roygbiv",
                "artist": { "name": "Boards of Canada" },
                "album": { "#text": "Music Has the Right to Children" },
                "url": "https://www.last.fm/music/t",
                "image": [{ "size": "medium", "#text": "m.png" }],
                "@attr": { "nowplaying": "true" }
            },
            {
                "name": "Olson",
                "artist": { "#text": "Boards of Canada" },
                "date": { "uts": "1722000000" }
            }
        ] } });

        let tracks = tracks_of(&payload);
        assert_eq!(tracks.len(), 2);
        assert!(tracks[0].now_playing);
        assert_eq!(tracks[0].image, "m.png");
        assert_eq!(tracks[1].date, Some(1722000000));
        assert!(!tracks[1].now_playing);
    }

    #[test]
    fn test_tracks_of_caps_at_limit() {
        let entries: Vec<_> = (0..30)
            .map(|i| json!({ "name": format!("t{}", i) }))
            .collect();
        let payload = json!({ "recenttracks": { "track": entries } });
        assert_eq!(tracks_of(&payload).len(), RECENT_TRACKS_LIMIT);
    }

    #[test]
    fn test_tracks_of_tolerates_empty_sentinel() {
        assert!(tracks_of(&json!({})).is_empty());
        assert!(tracks_of(&json!({ "recenttracks": {} })).is_empty());
    }
}
