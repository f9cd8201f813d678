//! moodmuse - quotes, affirmations and songs for how you feel
//!
//! Content comes from Gemini when an API key is configured, with an offline catalog
//! behind every failure. Favorites persist across runs.

pub mod config;
pub mod core;
pub mod db;
pub mod models;
pub mod plugins;
pub mod stores;
