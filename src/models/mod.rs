//! Data models for moodmuse

mod content;
mod mood;

pub use content::{Content, Song, SONGS_PER_CONTENT};
pub use mood::{Mood, UnknownMood};
