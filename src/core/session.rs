//! Session state handed to the presentation layer
//!
//! The orchestrator owns mood/content/loading/error and the favorites store owns the
//! saved collection. A `Session` bundles both so consumers receive them explicitly.

use anyhow::Result;
use serde::Serialize;

use super::orchestrator::{ContentOrchestrator, ContentSource, LoadState};
use crate::db::KeyValueStore;
use crate::models::{Content, Mood};
use crate::plugins::Generator;
use crate::stores::FavoritesStore;

/// Everything a view needs to render
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot<'a> {
    pub selected_mood: Option<Mood>,
    pub content: Option<&'a Content>,
    pub source: Option<ContentSource>,
    pub state: LoadState,
    pub error: Option<&'a str>,
    pub is_favorite: bool,
    pub favorites: &'a [Content],
}

pub struct Session<G, S> {
    orchestrator: ContentOrchestrator<G>,
    favorites: FavoritesStore<S>,
}

impl<G: Generator, S: KeyValueStore> Session<G, S> {
    pub fn new(orchestrator: ContentOrchestrator<G>, favorites: FavoritesStore<S>) -> Self {
        Self {
            orchestrator,
            favorites,
        }
    }

    pub fn orchestrator(&self) -> &ContentOrchestrator<G> {
        &self.orchestrator
    }

    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    pub fn select_mood(&mut self, mood: Mood) {
        self.orchestrator.select_mood(mood);
    }

    pub async fn request_content(&mut self) -> LoadState {
        self.orchestrator.request_content().await
    }

    pub fn add_favorite(&mut self, content: Content) -> Result<bool> {
        self.favorites.add(content)
    }

    pub fn remove_favorite(&mut self, content: &Content) -> Result<bool> {
        self.favorites.remove(content)
    }

    /// Save or unsave the current content. Returns the new status, or `None` when
    /// there is no content.
    pub fn toggle_current_favorite(&mut self) -> Result<Option<bool>> {
        match self.orchestrator.content() {
            Some(content) => self.favorites.toggle(content).map(Some),
            None => Ok(None),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        let content = self.orchestrator.content();
        SessionSnapshot {
            selected_mood: self.orchestrator.mood(),
            content,
            source: self.orchestrator.content_source(),
            state: self.orchestrator.state(),
            error: self.orchestrator.error(),
            is_favorite: content.map_or(false, |c| self.favorites.contains(c)),
            favorites: self.favorites.list(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::orchestrator::tests::ScriptedGenerator;
    use crate::core::orchestrator::OrchestratorSettings;
    use crate::db::MemoryStore;

    fn session() -> Session<ScriptedGenerator, MemoryStore> {
        Session::new(
            ContentOrchestrator::new(ScriptedGenerator::unconfigured(), OrchestratorSettings::default()),
            FavoritesStore::load(MemoryStore::new()),
        )
    }

    #[test]
    fn test_snapshot_tracks_flow() {
        let mut session = session();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.selected_mood, None);
        assert_eq!(snapshot.state, LoadState::Idle);
        assert!(snapshot.content.is_none());

        session.select_mood(Mood::Lonely);
        let state = tokio_test::block_on(session.request_content());
        assert_eq!(state, LoadState::Ready);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.selected_mood, Some(Mood::Lonely));
        assert_eq!(snapshot.source, Some(ContentSource::Fallback));
        assert!(!snapshot.is_favorite);
        assert!(snapshot.favorites.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_current_favorite() {
        let mut session = session();
        assert_eq!(session.toggle_current_favorite().unwrap(), None);

        session.select_mood(Mood::Happy);
        session.request_content().await;

        assert_eq!(session.toggle_current_favorite().unwrap(), Some(true));
        assert!(session.snapshot().is_favorite);
        assert_eq!(session.favorites().len(), 1);

        // a refresh yields the same catalog quote, so it is still a favorite
        session.request_content().await;
        assert!(session.snapshot().is_favorite);

        assert_eq!(session.toggle_current_favorite().unwrap(), Some(false));
        assert!(session.favorites().is_empty());
    }

    #[tokio::test]
    async fn test_add_and_remove_through_session() {
        let mut session = session();
        session.select_mood(Mood::Sad);
        session.request_content().await;

        let content = session.orchestrator().content().cloned().unwrap();
        assert!(session.add_favorite(content.clone()).unwrap());
        assert!(!session.add_favorite(content.clone()).unwrap());
        assert!(session.remove_favorite(&content).unwrap());

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["selectedMood"], "sad");
        assert_eq!(json["state"], "ready");
        assert_eq!(json["favorites"].as_array().unwrap().len(), 0);
    }
}
