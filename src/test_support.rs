//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::state::App;
use crate::generation::{ContentProvider, GenerationReply, ProviderError};

/// A canned provider for tests that don't need real API calls.
pub struct StubProvider {
    pub reply: Result<GenerationReply, ProviderError>,
}

impl StubProvider {
    pub fn ok(text: &str) -> Self {
        Self {
            reply: Ok(GenerationReply {
                text: text.to_string(),
                token_count: None,
            }),
        }
    }
}

#[async_trait]
impl ContentProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, _prompt: &str) -> Result<GenerationReply, ProviderError> {
        self.reply.clone()
    }
}

/// Creates a test App with a stub provider in place.
pub fn test_app() -> App {
    App::new(Some(Arc::new(StubProvider::ok("stub"))), "test-model".to_string())
}

/// Creates a test App with no API key resolved.
pub fn test_app_without_key() -> App {
    App::new(None, "test-model".to_string())
}
