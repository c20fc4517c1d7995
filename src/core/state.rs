//! # Application State
//!
//! Core business state for Adcopy. This module contains domain logic only -
//! no TUI-specific types. Presentation state (field buffers, focus, scroll)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Option<Arc<dyn ContentProvider>>  // None = no API key
//! ├── model_name: String                          // backend model id
//! ├── phase: Phase                                // request lifecycle
//! └── status_message: String                      // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::generation::{ContentProvider, GenerationResult};

/// Lifecycle of the current (or most recent) generation attempt.
///
/// Exactly one variant is live at any time, so the loading, output, and
/// error displays are mutually exclusive by construction. Every resolution
/// replaces the whole variant, which is also what guarantees Loading is
/// exited exactly once per attempt.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success(GenerationResult),
    Error(String),
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }
}

pub struct App {
    /// The generation backend. `None` when no API key was resolved from
    /// configuration; submission then short-circuits to an error without
    /// issuing a request.
    pub provider: Option<Arc<dyn ContentProvider>>,
    pub model_name: String,
    pub phase: Phase,
    pub status_message: String,
}

impl App {
    pub fn new(provider: Option<Arc<dyn ContentProvider>>, model_name: String) -> Self {
        Self {
            provider,
            model_name,
            phase: Phase::default(),
            status_message: String::from("Welcome to Adcopy!"),
        }
    }
}
