//! Validation and repair of raw generator output
//!
//! The generator is asked for a single JSON object but may wrap it in prose or
//! markdown. Shape problems (no object, missing quote/affirmation, songs not a list)
//! are rejected. Field quality problems (missing song titles, bad links, wrong song
//! count) are repaired so partial output is still usable.

use reqwest::Url;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::catalog::default_song;
use super::errors::{ContentError, ContentResult};
use crate::models::{Content, Song, SONGS_PER_CONTENT};

const YOUTUBE_SEARCH_URL: &str = "https://www.youtube.com/results";
const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Parse, validate and normalize raw generator text into `Content`
pub fn validate(raw: &str) -> ContentResult<Content> {
    let object = extract_object(raw).ok_or_else(|| {
        ContentError::MalformedResponse("no JSON object found in response".to_string())
    })?;

    let quote = required_text(&object, "quote")?;
    let affirmation = required_text(&object, "affirmation")?;

    let entries = match object.get("songs") {
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(ContentError::InvalidContentShape(
                "`songs` is not an array".to_string(),
            ))
        }
        None => {
            return Err(ContentError::InvalidContentShape(
                "missing `songs`".to_string(),
            ))
        }
    };

    if entries.len() > SONGS_PER_CONTENT {
        debug!("{} songs returned, trimming to {}", entries.len(), SONGS_PER_CONTENT);
    } else if entries.len() < SONGS_PER_CONTENT {
        warn!("Only {} songs returned, adding default songs", entries.len());
    }

    let mut songs: Vec<Song> = entries
        .iter()
        .take(SONGS_PER_CONTENT)
        .enumerate()
        .map(|(index, entry)| repair_song(index + 1, entry))
        .collect();

    while songs.len() < SONGS_PER_CONTENT {
        songs.push(default_song(songs.len()));
    }

    let background_image = object
        .get("backgroundImage")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string);

    Ok(Content {
        quote,
        affirmation,
        songs,
        background_image,
    })
}

/// Find the first top-level JSON object in `raw`.
///
/// Braces inside a candidate that failed to parse are not tried again, so a broken
/// outer object never yields one of its nested objects.
fn extract_object(raw: &str) -> Option<Map<String, Value>> {
    let mut resume = 0;

    for (start, _) in raw.match_indices('{') {
        if start < resume {
            continue;
        }

        let candidate = &raw[start..];
        let mut stream = serde_json::Deserializer::from_str(candidate).into_iter::<Value>();
        match stream.next() {
            Some(Ok(Value::Object(map))) => return Some(map),
            Some(Err(e)) if e.is_eof() => return None,
            _ => resume = start + balanced_len(candidate)?,
        }
    }

    None
}

/// Length of the brace-balanced span opening `text`, skipping braces in strings.
/// `None` when the span never closes.
fn balanced_len(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }

    None
}

/// Text values are kept verbatim; whitespace-only counts as missing
fn required_text(object: &Map<String, Value>, key: &str) -> ContentResult<String> {
    match present(object.get(key)) {
        Some(text) => Ok(text.to_string()),
        None => Err(ContentError::InvalidContentShape(format!(
            "`{}` is missing or empty",
            key
        ))),
    }
}

fn present(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.trim().is_empty())
}

fn non_empty<'a>(entry: &'a Value, key: &str) -> Option<&'a str> {
    present(entry.get(key))
}

/// Repair one song entry; `position` is 1-based
fn repair_song(position: usize, entry: &Value) -> Song {
    let title = match non_empty(entry, "title") {
        Some(title) => title.to_string(),
        None => {
            warn!("Song at position {} missing title, using placeholder", position);
            format!("Unknown Song {}", position)
        }
    };

    let artist = match non_empty(entry, "artist") {
        Some(artist) => artist.to_string(),
        None => {
            warn!("Song \"{}\" missing artist, using placeholder", title);
            UNKNOWN_ARTIST.to_string()
        }
    };

    let link = match non_empty(entry, "youtubeLink") {
        Some(link) if is_media_link(link.trim()) => link.trim().to_string(),
        _ => {
            debug!("Song \"{}\" has no valid YouTube link, using search link", title);
            search_link(&title, &artist)
        }
    };

    Song {
        title,
        artist,
        link: Some(link),
    }
}

/// Whether a link points at YouTube
pub fn is_media_link(link: &str) -> bool {
    let Ok(url) = Url::parse(link) else {
        return false;
    };

    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }

    match url.host_str() {
        Some(host) => host == "youtube.com" || host.ends_with(".youtube.com") || host == "youtu.be",
        None => false,
    }
}

/// YouTube search link for a song
pub fn search_link(title: &str, artist: &str) -> String {
    let query = format!("{} {}", title, artist);
    Url::parse_with_params(YOUTUBE_SEARCH_URL, &[("search_query", query.as_str())])
        .map(String::from)
        .unwrap_or_else(|_| YOUTUBE_SEARCH_URL.to_string())
}
