//! # TitleBar Component
//!
//! Top status bar showing the backend model and transient status messages.
//! Purely presentational: both values arrive as props from `App`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    /// Backend model id (e.g. "gemini-2.0-flash")
    pub model_name: String,
    /// Transient status (e.g. "Generating marketing content...")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(model_name: String, status_message: String) -> Self {
        Self {
            model_name,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Adcopy Studio (model: {})", self.model_name)
        } else {
            format!(
                "Adcopy Studio (model: {}) | {}",
                self.model_name, self.status_message
            )
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
