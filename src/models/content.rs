//! Content model: a quote, an affirmation, songs and a background image

use serde::{Deserialize, Serialize};

/// Number of songs every piece of content carries
pub const SONGS_PER_CONTENT: usize = 3;

/// A song recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    /// Playable link, stored under the key the generator uses
    #[serde(rename = "youtubeLink", default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Song {
    pub fn new(title: &str, artist: &str, link: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            link: Some(link.to_string()),
        }
    }
}

/// Inspiration shown for a mood
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub quote: String,
    pub affirmation: String,
    pub songs: Vec<Song>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

impl Content {
    /// Two contents are the same inspiration when quote and affirmation match.
    /// Songs and background image are ignored.
    pub fn same_inspiration(&self, other: &Content) -> bool {
        self.quote == other.quote && self.affirmation == other.affirmation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(quote: &str, affirmation: &str, songs: Vec<Song>) -> Content {
        Content {
            quote: quote.to_string(),
            affirmation: affirmation.to_string(),
            songs,
            background_image: None,
        }
    }

    #[test]
    fn test_identity_ignores_songs_and_image() {
        let a = content("Q", "A", vec![Song::new("One", "X", "https://www.youtube.com/watch?v=1")]);
        let mut b = content("Q", "A", Vec::new());
        b.background_image = Some("https://images.example/bg.jpg".to_string());

        assert!(a.same_inspiration(&b));
        assert_ne!(a, b);
        assert!(!a.same_inspiration(&content("Q", "other", Vec::new())));
        assert!(!a.same_inspiration(&content("other", "A", Vec::new())));
    }

    #[test]
    fn test_wire_field_names() {
        let mut c = content("Q", "A", vec![Song::new("T", "R", "https://www.youtube.com/watch?v=x")]);
        c.background_image = Some("https://img".to_string());

        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["backgroundImage"], "https://img");
        assert_eq!(json["songs"][0]["youtubeLink"], "https://www.youtube.com/watch?v=x");

        let bare = Song {
            title: "T".to_string(),
            artist: "R".to_string(),
            link: None,
        };
        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("youtubeLink").is_none());
    }
}
