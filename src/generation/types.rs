//! Wire types for the Gemini `generateContent` endpoint, plus the
//! provider-agnostic result types the rest of the app consumes.

use serde::{Deserialize, Serialize};

// ============================================================================
// Request Body
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

impl GenerateRequest {
    /// Wraps a prompt string in the nested contents/parts envelope.
    pub fn from_prompt(prompt: &str) -> Self {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Part {
    pub text: String,
}

// ============================================================================
// Response Body
// ============================================================================

/// The response envelope. Success and failure share one body type: the API
/// reports errors as an `error` object rather than a distinct schema, so
/// classification happens after decoding.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
    pub error: Option<ApiError>,
}

#[derive(Deserialize, Debug)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub total_tokens: Option<u64>,
}

#[derive(Deserialize, Debug)]
pub struct ApiError {
    pub message: Option<String>,
}

// ============================================================================
// Provider Results
// ============================================================================

/// What a provider hands back before client-side timing is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReply {
    pub text: String,
    pub token_count: Option<u64>,
}

/// The settled result shown in the output panel. Superseded wholesale by the
/// next submission.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub output_text: String,
    pub elapsed_ms: u64,
    pub token_count: Option<u64>,
}
