//! Content orchestrator
//!
//! Owns the selected mood and the current content. A request either asks the
//! generator (when a key is configured and offline mode is off) or goes straight to
//! the offline fallback. Any generator or validation failure is recovered by the
//! fallback; only a failing fallback leaves the orchestrator in `Failed`.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::catalog::MoodCatalog;
use super::errors::{ContentError, ContentResult};
use super::fallback::FallbackSelector;
use super::validator;
use crate::config::UserConfig;
use crate::models::{Content, Mood};
use crate::plugins::{uniqueness_token, Generator};

/// Request lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Where the current content came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Generated,
    Fallback,
}

/// Orchestrator behaviour knobs
#[derive(Debug, Clone)]
pub struct OrchestratorSettings {
    /// Never call the generator
    pub force_offline: bool,
    /// Simulated delay before offline content is served
    pub offline_delay: Duration,
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self {
            force_offline: false,
            offline_delay: Duration::ZERO,
        }
    }
}

impl From<&UserConfig> for OrchestratorSettings {
    fn from(config: &UserConfig) -> Self {
        Self {
            force_offline: config.use_mock_data,
            offline_delay: Duration::from_millis(config.offline_delay_ms),
        }
    }
}

pub struct ContentOrchestrator<G> {
    generator: G,
    catalog: Arc<MoodCatalog>,
    fallback: FallbackSelector,
    settings: OrchestratorSettings,
    mood: Option<Mood>,
    state: LoadState,
    content: Option<Content>,
    source: Option<ContentSource>,
    error: Option<String>,
}

impl<G: Generator> ContentOrchestrator<G> {
    pub fn new(generator: G, settings: OrchestratorSettings) -> Self {
        Self::with_catalog(generator, settings, MoodCatalog::builtin())
    }

    pub fn with_catalog(generator: G, settings: OrchestratorSettings, catalog: Arc<MoodCatalog>) -> Self {
        Self {
            generator,
            fallback: FallbackSelector::new(Arc::clone(&catalog)),
            catalog,
            settings,
            mood: None,
            state: LoadState::Idle,
            content: None,
            source: None,
            error: None,
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn content_source(&self) -> Option<ContentSource> {
        self.source
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a request will try the generator first
    pub fn generation_enabled(&self) -> bool {
        self.generator.is_configured() && !self.settings.force_offline
    }

    /// Select a mood. Clears content and error; does not request anything.
    pub fn select_mood(&mut self, mood: Mood) {
        self.mood = Some(mood);
        self.reset();
    }

    /// Return to the unselected state
    pub fn clear_mood(&mut self) {
        self.mood = None;
        self.reset();
    }

    fn reset(&mut self) {
        self.state = LoadState::Idle;
        self.content = None;
        self.source = None;
        self.error = None;
    }

    /// Acquire content for the selected mood and return the resulting state.
    ///
    /// No-op without a selected mood. Calls the generator at most once.
    pub async fn request_content(&mut self) -> LoadState {
        let Some(mood) = self.mood else {
            debug!("Content requested without a mood, ignoring");
            return self.state;
        };

        if self.state == LoadState::Loading {
            debug!("Previous request for {} did not complete, starting over", mood);
        }

        self.state = LoadState::Loading;
        self.error = None;

        let result = if self.generation_enabled() {
            match self.generate(mood).await {
                Ok(content) => Ok((content, ContentSource::Generated)),
                Err(ContentError::GenerationUnavailable) => {
                    debug!("Generator unavailable, using offline content");
                    self.fallback_for(mood, ContentError::GenerationUnavailable.to_string())
                }
                Err(err) => {
                    warn!("{}. Falling back to offline content.", err);
                    self.fallback_for(mood, err.to_string())
                }
            }
        } else {
            let reason = if self.settings.force_offline {
                "Offline mode forced by configuration"
            } else {
                "Gemini API key not configured"
            };
            info!("{}. Using offline content.", reason);

            if !self.settings.offline_delay.is_zero() {
                tokio::time::sleep(self.settings.offline_delay).await;
            }
            self.fallback_for(mood, reason.to_string())
        };

        match result {
            Ok((content, source)) => {
                self.content = Some(content);
                self.source = Some(source);
                self.state = LoadState::Ready;
            }
            Err(err) => {
                error!("{}", err);
                self.content = None;
                self.source = None;
                self.error = Some(err.to_string());
                self.state = LoadState::Failed;
            }
        }

        self.state
    }

    async fn generate(&self, mood: Mood) -> ContentResult<Content> {
        let token = uniqueness_token();
        let raw = self.generator.generate(mood, &token).await?;
        debug!("Raw generator response: {}", raw);

        let mut content = validator::validate(&raw).map_err(|err| {
            warn!("Rejected generator response ({}): {}", err, raw);
            err
        })?;

        content.background_image = Some(self.catalog.background_image_for(mood).to_string());
        Ok(content)
    }

    /// Offline content, wrapping a failure together with what led here
    fn fallback_for(&self, mood: Mood, original: String) -> ContentResult<(Content, ContentSource)> {
        self.fallback
            .select(mood)
            .map(|content| (content, ContentSource::Fallback))
            .map_err(|fallback| ContentError::FallbackFailed {
                original,
                fallback: fallback.to_string(),
            })
    }
}
