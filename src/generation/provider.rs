use std::fmt;

use async_trait::async_trait;

use super::types::GenerationReply;

/// Errors that can occur during a generation round trip.
/// Variants carry the failure class; the user-visible wording lives in
/// `user_message()` so the UI surfaces each class exactly one way.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// Provider misconfigured (missing API key). Checked before any request
    /// is issued.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The API reported an error object in its response body.
    Api { message: String },
    /// The response body could not be decoded.
    Parse(String),
    /// The response contained neither a candidate nor an error object.
    Empty,
}

impl ProviderError {
    /// The single message shown in the output area for each failure class.
    pub fn user_message(&self) -> String {
        match self {
            ProviderError::Config(msg) => msg.clone(),
            ProviderError::Api { message } => message.clone(),
            ProviderError::Empty => String::from("No content generated."),
            ProviderError::Network(_) | ProviderError::Parse(_) => {
                String::from("Failed to connect to Gemini API.")
            }
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { message } => write!(f, "API error: {message}"),
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
            ProviderError::Empty => write!(f, "empty response"),
        }
    }
}

impl std::error::Error for ProviderError {}

#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Issues one generation round trip for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<GenerationReply, ProviderError>;
}
