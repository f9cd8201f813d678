//! Favorites store - saved inspirations, deduplicated by quote and affirmation

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::db::KeyValueStore;
use crate::models::Content;

/// Key the whole collection is stored under
pub const FAVORITES_KEY: &str = "moodmuseFavorites";

/// Insertion-ordered favorites, persisted after every change
pub struct FavoritesStore<S> {
    backend: S,
    items: Vec<Content>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load favorites from the backend. Missing or unreadable data yields an empty
    /// collection.
    pub fn load(backend: S) -> Self {
        let items = match backend.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Content>>(&raw) {
                Ok(items) => dedupe(items),
                Err(e) => {
                    warn!("Error parsing stored favorites, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Error reading stored favorites, starting empty: {}", e);
                Vec::new()
            }
        };

        info!("Loaded {} favorites", items.len());
        Self { backend, items }
    }

    pub fn list(&self) -> &[Content] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, content: &Content) -> bool {
        self.items.iter().any(|fav| fav.same_inspiration(content))
    }

    /// Add content unless the same inspiration is already saved.
    /// Returns whether it was added.
    pub fn add(&mut self, content: Content) -> Result<bool> {
        if self.contains(&content) {
            debug!("Already in favorites: {:?}", content.quote);
            return Ok(false);
        }

        let mut items = self.items.clone();
        items.push(content);
        self.commit(items)?;
        Ok(true)
    }

    /// Remove every item with the same inspiration. Returns whether anything was removed.
    pub fn remove(&mut self, content: &Content) -> Result<bool> {
        if !self.contains(content) {
            return Ok(false);
        }

        let items = self
            .items
            .iter()
            .filter(|fav| !fav.same_inspiration(content))
            .cloned()
            .collect();
        self.commit(items)?;
        Ok(true)
    }

    /// Add when absent, remove when present. Returns the new favorite status.
    pub fn toggle(&mut self, content: &Content) -> Result<bool> {
        if self.contains(content) {
            self.remove(content)?;
            Ok(false)
        } else {
            self.add(content.clone())?;
            Ok(true)
        }
    }

    /// Write `items` to the backend, then make them the current collection.
    /// A failed write leaves the collection unchanged.
    fn commit(&mut self, items: Vec<Content>) -> Result<()> {
        let raw = serde_json::to_string(&items).context("Failed to serialize favorites")?;
        self.backend
            .set(FAVORITES_KEY, &raw)
            .context("Failed to save favorites")?;
        self.items = items;
        Ok(())
    }
}

fn dedupe(items: Vec<Content>) -> Vec<Content> {
    let mut unique: Vec<Content> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.iter().any(|fav| fav.same_inspiration(&item)) {
            unique.push(item);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{JsonFileStore, MemoryStore};
    use crate::models::Song;
    use anyhow::bail;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Memory store whose writes can be switched off
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        read_only: AtomicBool,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            if self.read_only.load(Ordering::SeqCst) {
                bail!("disk full");
            }
            self.inner.set(key, value)
        }
    }

    fn content(quote: &str, affirmation: &str, song: &str) -> Content {
        Content {
            quote: quote.to_string(),
            affirmation: affirmation.to_string(),
            songs: vec![Song::new(song, "Artist", "https://www.youtube.com/watch?v=x")],
            background_image: None,
        }
    }

    #[test]
    fn test_add_is_idempotent_and_remove_clears() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        let c = content("Q", "A", "One");

        assert!(store.add(c.clone()).unwrap());
        assert!(!store.add(c.clone()).unwrap());
        assert_eq!(store.len(), 1);

        assert!(store.remove(&c).unwrap());
        assert_eq!(store.len(), 0);
        assert!(!store.remove(&c).unwrap());
    }

    #[test]
    fn test_identity_ignores_songs() {
        let mut store = FavoritesStore::load(MemoryStore::new());

        assert!(store.add(content("Q", "A", "One")).unwrap());
        assert!(!store.add(content("Q", "A", "Two")).unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].songs[0].title, "One");

        // removing by identity works with either variant
        assert!(store.remove(&content("Q", "A", "Two")).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_insertion_order() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        store.add(content("Q1", "A", "x")).unwrap();
        store.add(content("Q2", "A", "x")).unwrap();
        store.add(content("Q3", "A", "x")).unwrap();
        store.remove(&content("Q2", "A", "x")).unwrap();

        let quotes: Vec<&str> = store.list().iter().map(|c| c.quote.as_str()).collect();
        assert_eq!(quotes, vec!["Q1", "Q3"]);
    }

    #[test]
    fn test_toggle() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        let c = content("Q", "A", "x");

        assert!(store.toggle(&c).unwrap());
        assert!(store.contains(&c));
        assert!(!store.toggle(&c).unwrap());
        assert!(!store.contains(&c));
    }

    #[test]
    fn test_every_change_is_persisted() {
        let backend = Arc::new(MemoryStore::new());
        let mut store = FavoritesStore::load(Arc::clone(&backend));

        store.add(content("Q1", "A", "x")).unwrap();
        store.add(content("Q2", "A", "x")).unwrap();
        let saved: Vec<Content> =
            serde_json::from_str(&backend.get(FAVORITES_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(saved.len(), 2);

        store.remove(&content("Q1", "A", "x")).unwrap();
        let reloaded = FavoritesStore::load(Arc::clone(&backend));
        assert_eq!(reloaded.list(), store.list());
    }

    #[test]
    fn test_survives_reopen_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        {
            let mut store = FavoritesStore::load(JsonFileStore::open(&path).unwrap());
            store.add(content("Q", "A", "x")).unwrap();
        }

        let store = FavoritesStore::load(JsonFileStore::open(&path).unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].quote, "Q");
    }

    #[test]
    fn test_corrupted_value_loads_empty() {
        let backend = Arc::new(MemoryStore::new());
        backend.set(FAVORITES_KEY, "{broken").unwrap();

        let mut store = FavoritesStore::load(Arc::clone(&backend));
        assert!(store.is_empty());

        // first change overwrites the bad value
        store.add(content("Q", "A", "x")).unwrap();
        assert_eq!(FavoritesStore::load(backend).len(), 1);
    }

    #[test]
    fn test_load_collapses_duplicates() {
        let backend = Arc::new(MemoryStore::new());
        let raw = serde_json::to_string(&vec![
            content("Q", "A", "One"),
            content("Q", "A", "Two"),
            content("Q2", "A", "Three"),
        ])
        .unwrap();
        backend.set(FAVORITES_KEY, &raw).unwrap();

        let store = FavoritesStore::load(backend);
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].songs[0].title, "One");
    }

    #[test]
    fn test_failed_write_keeps_collection_unchanged() {
        let backend = Arc::new(FlakyStore::default());
        let mut store = FavoritesStore::load(Arc::clone(&backend));
        let kept = content("Kept", "A", "x");
        store.add(kept.clone()).unwrap();

        backend.read_only.store(true, Ordering::SeqCst);
        let fresh = content("Q", "A", "x");
        assert!(store.add(fresh.clone()).is_err());
        assert_eq!(store.len(), 1);
        assert!(!store.contains(&fresh));

        assert!(store.remove(&kept).is_err());
        assert!(store.contains(&kept));

        // once writes work again the same add goes through and is saved
        backend.read_only.store(false, Ordering::SeqCst);
        assert!(store.add(fresh.clone()).unwrap());
        let reloaded = FavoritesStore::load(Arc::clone(&backend));
        assert!(reloaded.contains(&fresh));
        assert_eq!(reloaded.len(), 2);
    }
}
