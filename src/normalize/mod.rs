//! Field-level normalization of Last.fm's semi-structured payloads.
//!
//! The upstream API is inconsistent: the same conceptual field may arrive
//! as a string, a nested object, or an array of variant-sized images, and
//! any of them may be missing. Every function here degrades to a neutral
//! value instead of failing, so the assemblers never have to branch on
//! payload shape.

use serde::Serialize;
use serde_json::Value;

use crate::reports::models::{TopArtist, TopTrack, TrackRecord};

/// Month names indexed by zero-based month, for the "member since" label.
const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Sizes tried, in order, when the preferred image variant is missing.
const IMAGE_FALLBACK_ORDER: [&str; 3] = ["large", "medium", "small"];

/// Month/year a profile was registered, decomposed for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthYear {
    pub month: String,
    pub year: i32,
}

/// Display name of a track's artist: nested `name` field first, then the
/// flattened `#text` form, then empty.
pub fn artist_name(entity: &Value) -> String {
    let artist = &entity["artist"];
    artist["name"]
        .as_str()
        .or_else(|| artist["#text"].as_str())
        .unwrap_or("")
        .to_string()
}

/// Parse a count that may be a JSON number or a numeric string; anything
/// else is 0. Used for display playcounts and totals.
pub fn count_or_zero(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.parse().unwrap_or(0),
        _ => 0,
    }
}

/// Parse a weight, substituting 1.0 for anything absent, malformed, or
/// non-positive. Tag counts and artist weights go through this so the
/// genre distribution never divides by zero.
pub fn weight_or_one(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    };
    match parsed {
        Some(w) if w > 0.0 => w,
        _ => 1.0,
    }
}

fn variant(images: &Value, size: &str) -> Option<String> {
    images.as_array()?.iter().find_map(|img| {
        if img["size"].as_str() != Some(size) {
            return None;
        }
        match img["#text"].as_str() {
            Some(text) if !text.is_empty() => Some(text.to_string()),
            _ => None,
        }
    })
}

/// Best-available image from a set of size-tagged variants: `extralarge`
/// if it has content, else `large`, `medium`, `small` in that fixed
/// order, else empty. The order trades visual quality for availability
/// and must not change.
pub fn pick_image(images: &Value) -> String {
    variant(images, "extralarge")
        .or_else(|| {
            IMAGE_FALLBACK_ORDER
                .iter()
                .find_map(|size| variant(images, size))
        })
        .unwrap_or_default()
}

/// Exact-size image lookup with no fallback chain.
pub fn image_of_size(images: &Value, size: &str) -> String {
    variant(images, size).unwrap_or_default()
}

/// True only when the per-track attribute block marks the play as live,
/// with the literal string "true".
pub fn now_playing(track: &Value) -> bool {
    track["@attr"]["nowplaying"].as_str() == Some("true")
}

/// Decompose a registration block's `#text` of the form
/// "YYYY-MM-DD HH:MM". Fewer than two hyphen-delimited date components
/// means the date is unusable and yields no result.
pub fn month_year_from_registered(registered: &Value) -> Option<MonthYear> {
    let text = registered["#text"].as_str().unwrap_or("");
    let date_part = text.split(' ').next().unwrap_or("");
    let parts: Vec<&str> = date_part.split('-').collect();
    if parts.len() < 2 {
        return None;
    }
    let year = parts[0].parse().unwrap_or(0);
    let month = parts[1]
        .parse::<usize>()
        .ok()
        .and_then(|m| MONTH_NAMES.get(m.wrapping_sub(1)))
        .copied()
        .unwrap_or("")
        .to_string();
    Some(MonthYear { month, year })
}

/// One recent play. Recent entries carry a `medium` image and may be the
/// currently-playing track, in which case they have no timestamp.
pub fn track_record(track: &Value) -> TrackRecord {
    TrackRecord {
        artist: artist_name(track),
        title: track["name"].as_str().unwrap_or("").to_string(),
        album: track["album"]["#text"].as_str().unwrap_or("").to_string(),
        url: track["url"].as_str().unwrap_or("").to_string(),
        image: image_of_size(&track["image"], "medium"),
        now_playing: now_playing(track),
        date: track["date"]["uts"]
            .as_str()
            .and_then(|uts| uts.parse().ok())
            .or_else(|| track["date"]["uts"].as_i64()),
    }
}

/// One entry of a top-tracks result set.
pub fn top_track(track: &Value) -> TopTrack {
    TopTrack {
        name: track["name"].as_str().unwrap_or("").to_string(),
        artist: artist_name(track),
        playcount: count_or_zero(&track["playcount"]),
        image: pick_image(&track["image"]),
    }
}

/// One entry of a top-artists result set.
pub fn top_artist(artist: &Value) -> TopArtist {
    TopArtist {
        name: artist["name"].as_str().unwrap_or("").to_string(),
        playcount: count_or_zero(&artist["playcount"]),
        image: pick_image(&artist["image"]),
    }
}
