//! Content generators
//!
//! A generator turns a mood into raw, unvalidated text from an external
//! text-generation service. Validation happens in `core::validator`.

pub mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use rand::Rng;

use crate::core::errors::ContentResult;
use crate::models::Mood;

/// An external text generator
#[async_trait]
pub trait Generator: Send + Sync {
    /// Whether a credential is configured
    fn is_configured(&self) -> bool;

    /// Request raw text for a mood.
    ///
    /// Fails with `GenerationUnavailable` when no credential is configured and
    /// `GenerationFailed` on transport or service errors.
    async fn generate(&self, mood: Mood, token: &str) -> ContentResult<String>;
}

/// Token that makes each generation request unique
pub fn uniqueness_token() -> String {
    format!(
        "{}-{}",
        chrono::Utc::now().timestamp_millis(),
        rand::thread_rng().gen_range(0..10_000)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniqueness_token_shape() {
        let token = uniqueness_token();
        let (millis, seed) = token.split_once('-').unwrap();
        assert!(millis.parse::<i64>().unwrap() > 0);
        assert!(seed.parse::<u32>().unwrap() < 10_000);
    }
}
