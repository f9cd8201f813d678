//! Offline content built from the mood catalog

use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

use super::catalog::MoodCatalog;
use super::errors::{ContentError, ContentResult};
use crate::models::{Content, Mood, SONGS_PER_CONTENT};

/// Builds content without the generator
#[derive(Debug, Clone)]
pub struct FallbackSelector {
    catalog: Arc<MoodCatalog>,
}

impl FallbackSelector {
    pub fn new(catalog: Arc<MoodCatalog>) -> Self {
        Self { catalog }
    }

    /// Selector over the built-in catalog
    pub fn builtin() -> Self {
        Self::new(MoodCatalog::builtin())
    }

    /// Fallback content for a mood using the thread-local rng
    pub fn select(&self, mood: Mood) -> ContentResult<Content> {
        self.select_with_rng(mood, &mut rand::thread_rng())
    }

    /// Fallback content for a mood.
    ///
    /// Songs are the first three of a uniform random permutation of the mood's pool.
    pub fn select_with_rng<R: Rng + ?Sized>(&self, mood: Mood, rng: &mut R) -> ContentResult<Content> {
        let pool = self.catalog.songs_for(mood);
        if pool.len() < SONGS_PER_CONTENT {
            return Err(ContentError::CatalogExhausted {
                mood,
                available: pool.len(),
            });
        }

        let mut songs = pool.to_vec();
        songs.shuffle(rng);
        songs.truncate(SONGS_PER_CONTENT);

        let fallback = self.catalog.fallback_for(mood);
        Ok(Content {
            quote: fallback.quote.clone(),
            affirmation: fallback.affirmation.clone(),
            songs,
            background_image: Some(fallback.background_image.clone()),
        })
    }
}
