//! Error types for the content pipeline

use thiserror::Error;

use crate::models::Mood;

/// Errors raised while acquiring content for a mood
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// No credential configured for the generator
    #[error("Content generation is not configured")]
    GenerationUnavailable,

    /// Transport or service error from the generator
    #[error("Content generation failed: {0}")]
    GenerationFailed(String),

    /// No JSON object could be found in the generator output
    #[error("Malformed generator response: {0}")]
    MalformedResponse(String),

    /// A JSON object was found but is missing required fields
    #[error("Invalid content shape: {0}")]
    InvalidContentShape(String),

    /// The catalog cannot supply enough songs for a mood
    #[error("Catalog has only {available} songs for {mood} mood")]
    CatalogExhausted { mood: Mood, available: usize },

    /// Both the primary path and the offline fallback failed
    #[error("Failed to generate content. Error: {original}. Fallback error: {fallback}")]
    FallbackFailed { original: String, fallback: String },
}

/// Result type for content operations
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_failed_message_names_both_errors() {
        let err = ContentError::FallbackFailed {
            original: ContentError::GenerationFailed("timeout".to_string()).to_string(),
            fallback: ContentError::CatalogExhausted {
                mood: Mood::Sad,
                available: 1,
            }
            .to_string(),
        };

        let msg = err.to_string();
        assert!(msg.starts_with("Failed to generate content. Error: Content generation failed: timeout."));
        assert!(msg.ends_with("Fallback error: Catalog has only 1 songs for sad mood"));
    }
}
