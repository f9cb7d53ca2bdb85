//! Canned Last.fm payloads served by the mock upstream.
//!
//! The shapes mirror what the real API returns: counts are strings,
//! artists are sometimes nested objects, images are size-tagged variant
//! arrays with occasionally empty content.

use serde_json::{json, Value};

pub fn recent_tracks() -> Value {
    json!({ "recenttracks": { "track": [
        {
            "name": "Roygbiv",
            "url": "https://www.last.fm/music/Boards+of+Canada/_/Roygbiv",
            "artist": { "name": "Boards of Canada" },
            "album": { "#text": "Music Has the Right to Children" },
            "image": [
                { "size": "small", "#text": "https://img.example/roygbiv-s.png" },
                { "size": "medium", "#text": "https://img.example/roygbiv-m.png" },
                { "size": "extralarge", "#text": "https://img.example/roygbiv-xl.png" }
            ],
            "@attr": { "nowplaying": "true" }
        },
        {
            "name": "Olson",
            "url": "https://www.last.fm/music/Boards+of+Canada/_/Olson",
            "artist": { "#text": "Boards of Canada" },
            "album": { "#text": "Music Has the Right to Children" },
            "image": [
                { "size": "medium", "#text": "" },
                { "size": "small", "#text": "https://img.example/olson-s.png" }
            ],
            "date": { "uts": "1722000000" }
        }
    ] } })
}

pub fn top_tracks() -> Value {
    json!({ "toptracks": { "track": [
        {
            "name": "Roygbiv",
            "artist": { "name": "Boards of Canada" },
            "playcount": "10",
            "image": [
                { "size": "large", "#text": "https://img.example/roygbiv-l.png" },
                { "size": "extralarge", "#text": "https://img.example/roygbiv-xl.png" }
            ]
        },
        {
            "name": "Windowlicker",
            "artist": { "name": "Aphex Twin" },
            "playcount": "5",
            "image": []
        },
        {
            "name": "Olson",
            "artist": { "#text": "Boards of Canada" },
            "playcount": "2",
            "image": []
        }
    ] } })
}

pub fn top_artists() -> Value {
    json!({ "topartists": {
        "artist": [
            {
                "name": "Boards of Canada",
                "playcount": "4",
                "image": [
                    { "size": "extralarge", "#text": "https://img.example/boc-xl.png" }
                ]
            },
            {
                "name": "Aphex Twin",
                "playcount": "2",
                "image": []
            }
        ],
        "@attr": { "total": "42" }
    } })
}

pub fn user_info() -> Value {
    json!({ "user": {
        "name": "alice",
        "playcount": "3456",
        "registered": { "#text": "2002-11-20 11:50", "unixtime": "1037793040" }
    } })
}

pub fn artist_top_tags(artist: &str) -> Value {
    match artist {
        "Boards of Canada" => json!({ "toptags": { "tag": [
            { "name": "IDM", "count": "50" },
            { "name": "ambient", "count": "30" }
        ] } }),
        "Aphex Twin" => json!({ "toptags": { "tag": [
            { "name": "idm", "count": "40" },
            { "name": "acid", "count": "20" }
        ] } }),
        _ => json!({ "toptags": { "tag": [] } }),
    }
}
