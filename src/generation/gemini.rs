//! Gemini provider implementation using the `generateContent` endpoint.
//!
//! One POST per generation, no streaming. The API key travels as a `key`
//! query parameter; the model is part of the URL path.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::provider::{ContentProvider, ProviderError};
use super::types::{GenerateRequest, GenerateResponse, GenerationReply};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Fallback when the API reports an error object without a message string.
const UNKNOWN_API_ERROR: &str = "Unknown error from Gemini API.";

// ============================================================================
// Classification
// ============================================================================

/// Classifies a decoded response body into a reply or a failure.
///
/// A non-empty text in the first candidate wins; otherwise an `error` object
/// maps to `Api`, and a body with neither shape maps to `Empty`. HTTP status
/// plays no part here; the API reports failures in the body either way.
fn classify_response(response: GenerateResponse) -> Result<GenerationReply, ProviderError> {
    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|content| content.parts.first())
        .map(|part| part.text.clone())
        .unwrap_or_default();

    if !text.is_empty() {
        return Ok(GenerationReply {
            text,
            token_count: response.usage_metadata.and_then(|u| u.total_tokens),
        });
    }

    if let Some(error) = response.error {
        return Err(ProviderError::Api {
            message: error
                .message
                .unwrap_or_else(|| UNKNOWN_API_ERROR.to_string()),
        });
    }

    Err(ProviderError::Empty)
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Gemini API provider.
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Creates a new Gemini client.
    ///
    /// # Arguments
    /// * `api_key` - Gemini API key
    /// * `model` - Model id interpolated into the endpoint path
    /// * `base_url` - Optional custom base URL (defaults to Google's API)
    pub fn new(api_key: String, model: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            model,
            base_url: base_url.unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContentProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<GenerationReply, ProviderError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GenerateRequest::from_prompt(prompt);

        info!(
            "Gemini request: model={}, prompt_len={}",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Gemini response status: {}", status);

        // Decode the body regardless of status: the API reports failures as
        // an `error` object with a non-2xx status, and that message is what
        // the user should see.
        let decoded: GenerateResponse = response.json().await.map_err(|e| {
            warn!("Gemini response decode failed (status {}): {}", status, e);
            ProviderError::Parse(e.to_string())
        })?;

        classify_response(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::types::{ApiError, Candidate, CandidateContent, Part, UsageMetadata};

    fn success_body(text: &str, total_tokens: Option<u64>) -> GenerateResponse {
        GenerateResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![Part {
                        text: text.to_string(),
                    }],
                }),
            }],
            usage_metadata: total_tokens.map(|t| UsageMetadata {
                total_tokens: Some(t),
            }),
            error: None,
        }
    }

    #[test]
    fn test_classify_success_with_tokens() {
        let reply = classify_response(success_body("Hello", Some(42))).unwrap();
        assert_eq!(reply.text, "Hello");
        assert_eq!(reply.token_count, Some(42));
    }

    #[test]
    fn test_classify_success_without_usage() {
        let reply = classify_response(success_body("Hello", None)).unwrap();
        assert_eq!(reply.token_count, None);
    }

    #[test]
    fn test_classify_api_error() {
        let response = GenerateResponse {
            candidates: vec![],
            usage_metadata: None,
            error: Some(ApiError {
                message: Some("quota exceeded".to_string()),
            }),
        };
        assert_eq!(
            classify_response(response),
            Err(ProviderError::Api {
                message: "quota exceeded".to_string()
            })
        );
    }

    #[test]
    fn test_classify_api_error_without_message_uses_fallback() {
        let response = GenerateResponse {
            candidates: vec![],
            usage_metadata: None,
            error: Some(ApiError { message: None }),
        };
        assert_eq!(
            classify_response(response),
            Err(ProviderError::Api {
                message: UNKNOWN_API_ERROR.to_string()
            })
        );
    }

    #[test]
    fn test_classify_neither_shape_is_empty() {
        assert_eq!(
            classify_response(GenerateResponse::default()),
            Err(ProviderError::Empty)
        );
    }

    #[test]
    fn test_classify_empty_text_is_not_success() {
        // A candidate with an empty text field does not satisfy the success
        // condition; with no error object it classifies as Empty.
        let response = success_body("", None);
        assert_eq!(classify_response(response), Err(ProviderError::Empty));
    }

    #[test]
    fn test_classify_candidate_wins_over_error() {
        // Mirrors the shape check order: a usable candidate is a success
        // even if an error object is also present.
        let mut response = success_body("Hello", None);
        response.error = Some(ApiError {
            message: Some("ignored".to_string()),
        });
        assert!(classify_response(response).is_ok());
    }

    #[test]
    fn test_default_base_url_applied() {
        let client = GeminiClient::new("k".to_string(), "gemini-2.0-flash".to_string(), None);
        assert_eq!(client.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(client.name(), "gemini");
    }
}
