//! Gemini generator - requests mood content from Google's generateContent API

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use super::Generator;
use crate::config::UserConfig;
use crate::core::errors::{ContentError, ContentResult};
use crate::models::Mood;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Gemini API client
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            model,
        }
    }

    pub fn from_config(config: &UserConfig) -> Self {
        Self::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_URL, self.model)
    }

    /// Prompt asking for one JSON object of mood content
    pub fn build_prompt(mood: Mood, token: &str) -> String {
        format!(
            r#"Respond with a single JSON object of mood-based content for someone feeling "{mood}".
This is request #{token}; recommend different songs than earlier requests.

The object must have exactly these fields:
- quote: a meaningful, inspirational quote that resonates with a {mood} mood
- affirmation: a positive affirmation that helps with a {mood} mood
- songs: an array of exactly 3 objects with "title", "artist" and "youtubeLink"

Pick recent, varied songs across different artists and genres and avoid the most obvious choices.
Each youtubeLink must be a YouTube URL for the official video or a high-quality upload.

Example:
{{"quote": "...", "affirmation": "...", "songs": [{{"title": "...", "artist": "...", "youtubeLink": "https://www.youtube.com/watch?v=..."}}]}}

Respond ONLY with the JSON object."#,
            mood = mood,
            token = token
        )
    }

    fn extract_text(response: GenerateResponse) -> Option<String> {
        let text = response
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect::<Vec<_>>()
            .join("\n");

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[async_trait]
impl Generator for GeminiClient {
    fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    async fn generate(&self, mood: Mood, token: &str) -> ContentResult<String> {
        if !self.is_configured() {
            return Err(ContentError::GenerationUnavailable);
        }

        let prompt = Self::build_prompt(mood, token);
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: &prompt }],
            }],
        };

        info!("Generating content for {} mood with {}...", mood, self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ContentError::GenerationFailed(format!("API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ContentError::GenerationFailed(format!(
                "API error {}: {}",
                status, error_text
            )));
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            ContentError::GenerationFailed(format!("Failed to parse API response: {}", e))
        })?;

        Self::extract_text(body).ok_or_else(|| {
            ContentError::GenerationFailed("API response contained no text".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: &str) -> GeminiClient {
        GeminiClient::new(
            api_key.to_string(),
            "gemini-2.0-flash".to_string(),
            Duration::from_secs(5),
        )
    }

    #[test]
    fn test_prompt_varies_with_token() {
        let a = GeminiClient::build_prompt(Mood::Lonely, "1700000000000-12");
        let b = GeminiClient::build_prompt(Mood::Lonely, "1700000000000-13");

        assert!(a.contains("\"lonely\""));
        assert!(a.contains("#1700000000000-12"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_endpoint_uses_model() {
        assert_eq!(
            client("key").endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_blank_key_is_unavailable() {
        let gemini = client("   ");
        assert!(!gemini.is_configured());

        let result = tokio_test::block_on(gemini.generate(Mood::Happy, "t"));
        assert_eq!(result, Err(ContentError::GenerationUnavailable));
    }

    #[test]
    fn test_extract_text_joins_first_candidate_parts() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [
                {"content": {"parts": [{"text": "{\"quote\":"}, {"text": "\"Q\"}"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            GeminiClient::extract_text(body).as_deref(),
            Some("{\"quote\":\n\"Q\"}")
        );
    }

    #[test]
    fn test_extract_text_empty_response() {
        let body: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(GeminiClient::extract_text(body).is_none());

        let body: GenerateResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert!(GeminiClient::extract_text(body).is_none());
    }
}
