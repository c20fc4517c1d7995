//! # Actions
//!
//! Everything that can happen in Adcopy becomes an `Action`.
//! User presses Enter? That's `Action::Submit(fields)`.
//! The request resolves? That's `Action::GenerationFinished(outcome)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state. No I/O here; side effects are described by the
//! returned `Effect` and performed by the TUI loop.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes the submission state machine testable without a terminal
//! or a network: `update(app, action)` and assert on `app.phase`.

use log::{info, warn};

use crate::core::catalog::PROMPT_TEMPLATES;
use crate::core::prompt::build_prompt;
use crate::core::state::{App, Phase};
use crate::generation::{GenerationResult, ProviderError};

/// Shown when submission is attempted without a resolved API key.
pub const MISSING_KEY_MESSAGE: &str =
    "Gemini API key not found. Set GEMINI_API_KEY or add [gemini] api_key to ~/.adcopy/config.toml.";

/// Form field values captured at submission time.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub template_index: usize,
    pub phone_model: String,
    pub target_audience: String,
    pub key_features: String,
}

/// Everything that can happen in Adcopy.
#[derive(Debug)]
pub enum Action {
    /// The form was submitted with the given field values.
    Submit(Submission),
    /// The in-flight generation resolved, on any branch.
    GenerationFinished(Result<GenerationResult, ProviderError>),
    /// Export the current output to the fixed filename.
    Export,
    Quit,
}

/// Side effects the TUI loop must perform after a state transition.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    /// Spawn the generation request for the given prompt.
    SpawnRequest(String),
    /// Write the given text to the export file.
    Export(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(submission) => {
            if app.phase.is_loading() {
                // One request in flight at a time. The submit control renders
                // disabled while loading, but a queued key press can still
                // race the resolution.
                return Effect::None;
            }
            if app.provider.is_none() {
                warn!("Submission attempted without an API key");
                let error = ProviderError::Config(MISSING_KEY_MESSAGE.to_string());
                app.status_message = String::new();
                app.phase = Phase::Error(error.user_message());
                return Effect::None;
            }

            let index = submission.template_index.min(PROMPT_TEMPLATES.len() - 1);
            let template = &PROMPT_TEMPLATES[index];
            let prompt = build_prompt(
                template,
                &submission.phone_model,
                &submission.target_audience,
                &submission.key_features,
            );
            info!(
                "Submitting generation: template={}, prompt_len={}",
                template.value,
                prompt.len()
            );

            // Previous output or error is discarded wholesale here.
            app.phase = Phase::Loading;
            app.status_message = String::from("Generating marketing content...");
            Effect::SpawnRequest(prompt)
        }
        Action::GenerationFinished(outcome) => {
            match outcome {
                Ok(result) => {
                    info!(
                        "Generation succeeded: {} bytes in {} ms",
                        result.output_text.len(),
                        result.elapsed_ms
                    );
                    app.status_message = format!("Done in {} ms", result.elapsed_ms);
                    app.phase = Phase::Success(result);
                }
                Err(e) => {
                    warn!("Generation failed: {}", e);
                    app.status_message = String::new();
                    app.phase = Phase::Error(e.user_message());
                }
            }
            Effect::None
        }
        Action::Export => match &app.phase {
            Phase::Success(result) => Effect::Export(result.output_text.clone()),
            _ => {
                app.status_message = String::from("Nothing to export yet.");
                Effect::None
            }
        },
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_app_without_key};

    fn submission() -> Submission {
        Submission {
            template_index: 0,
            phone_model: "iPhone 15".to_string(),
            target_audience: "Tech enthusiasts".to_string(),
            key_features: "48MP camera".to_string(),
        }
    }

    fn success_result() -> GenerationResult {
        GenerationResult {
            output_text: "Hello".to_string(),
            elapsed_ms: 12,
            token_count: Some(42),
        }
    }

    #[test]
    fn test_submit_enters_loading_and_spawns_request() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Submit(submission()));
        assert_eq!(app.phase, Phase::Loading);
        assert_eq!(app.status_message, "Generating marketing content...");
        match effect {
            Effect::SpawnRequest(prompt) => {
                assert!(prompt.contains("Phone Model: iPhone 15"));
                assert!(prompt.contains("Target Audience: Tech enthusiasts"));
                assert!(prompt.contains("Key Features: 48MP camera"));
            }
            other => panic!("expected SpawnRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_discards_previous_output_and_error() {
        let mut app = test_app();
        app.phase = Phase::Success(success_result());
        update(&mut app, Action::Submit(submission()));
        assert_eq!(app.phase, Phase::Loading);

        let mut app = test_app();
        app.phase = Phase::Error("old error".to_string());
        update(&mut app, Action::Submit(submission()));
        assert_eq!(app.phase, Phase::Loading);
    }

    #[test]
    fn test_submit_without_key_never_issues_request() {
        let mut app = test_app_without_key();
        let effect = update(&mut app, Action::Submit(submission()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.phase, Phase::Error(MISSING_KEY_MESSAGE.to_string()));
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::Submit(submission()));
        assert_eq!(app.phase, Phase::Loading);

        let effect = update(&mut app, Action::Submit(submission()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.phase, Phase::Loading);
    }

    #[test]
    fn test_generation_success_transition() {
        let mut app = test_app();
        update(&mut app, Action::Submit(submission()));
        let effect = update(&mut app, Action::GenerationFinished(Ok(success_result())));
        assert_eq!(effect, Effect::None);
        match &app.phase {
            Phase::Success(result) => {
                assert_eq!(result.output_text, "Hello");
                assert_eq!(result.token_count, Some(42));
            }
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[test]
    fn test_generation_api_error_transition() {
        let mut app = test_app();
        update(&mut app, Action::Submit(submission()));
        update(
            &mut app,
            Action::GenerationFinished(Err(ProviderError::Api {
                message: "quota exceeded".to_string(),
            })),
        );
        assert_eq!(app.phase, Phase::Error("quota exceeded".to_string()));
    }

    #[test]
    fn test_generation_empty_transition() {
        let mut app = test_app();
        update(&mut app, Action::Submit(submission()));
        update(&mut app, Action::GenerationFinished(Err(ProviderError::Empty)));
        assert_eq!(app.phase, Phase::Error("No content generated.".to_string()));
    }

    #[test]
    fn test_generation_transport_failure_transition() {
        let mut app = test_app();
        update(&mut app, Action::Submit(submission()));
        update(
            &mut app,
            Action::GenerationFinished(Err(ProviderError::Network("connection refused".to_string()))),
        );
        assert_eq!(
            app.phase,
            Phase::Error("Failed to connect to Gemini API.".to_string())
        );
    }

    /// Loading, output, and error are carried by a single enum, so at most
    /// one is observable after any sequence of transitions.
    #[test]
    fn test_phases_are_mutually_exclusive_after_settling() {
        let mut app = test_app();
        update(&mut app, Action::Submit(submission()));
        update(&mut app, Action::GenerationFinished(Ok(success_result())));
        assert!(!app.phase.is_loading());
        assert!(matches!(app.phase, Phase::Success(_)));

        update(&mut app, Action::Submit(submission()));
        update(&mut app, Action::GenerationFinished(Err(ProviderError::Empty)));
        assert!(!app.phase.is_loading());
        assert!(matches!(app.phase, Phase::Error(_)));
    }

    #[test]
    fn test_export_with_output() {
        let mut app = test_app();
        app.phase = Phase::Success(GenerationResult {
            output_text: "ABC".to_string(),
            elapsed_ms: 1,
            token_count: None,
        });
        assert_eq!(update(&mut app, Action::Export), Effect::Export("ABC".to_string()));
    }

    #[test]
    fn test_export_without_output() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Export), Effect::None);
        assert_eq!(app.status_message, "Nothing to export yet.");

        app.phase = Phase::Error("boom".to_string());
        assert_eq!(update(&mut app, Action::Export), Effect::None);
    }

    #[test]
    fn test_out_of_range_template_index_is_clamped() {
        let mut app = test_app();
        let mut fields = submission();
        fields.template_index = 99;
        let effect = update(&mut app, Action::Submit(fields));
        match effect {
            Effect::SpawnRequest(prompt) => {
                assert!(prompt.starts_with("Write a detailed technical review"));
            }
            other => panic!("expected SpawnRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
