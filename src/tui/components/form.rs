//! # Generator Form Component
//!
//! Owns the editable form state: the selected content type and the three
//! free-text fields, plus which of them has focus. Submission is emitted as
//! a high-level event carrying a snapshot of the field values; the request
//! lifecycle itself lives in `core`.
//!
//! The submit control is a prop (`submit_enabled`): while a request is in
//! flight the form swallows Enter, which is the app's only concurrency guard.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::action::Submission;
use crate::core::catalog::PROMPT_TEMPLATES;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use super::field::TextField;

/// Rows: content type + three bordered text fields + submit line.
pub const FORM_HEIGHT: u16 = 13;

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// User submitted the form (Enter pressed while enabled).
    Submit(Submission),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    ContentType,
    PhoneModel,
    TargetAudience,
    KeyFeatures,
}

impl FormFocus {
    fn next(self) -> FormFocus {
        match self {
            FormFocus::ContentType => FormFocus::PhoneModel,
            FormFocus::PhoneModel => FormFocus::TargetAudience,
            FormFocus::TargetAudience => FormFocus::KeyFeatures,
            FormFocus::KeyFeatures => FormFocus::ContentType,
        }
    }

    fn prev(self) -> FormFocus {
        match self {
            FormFocus::ContentType => FormFocus::KeyFeatures,
            FormFocus::PhoneModel => FormFocus::ContentType,
            FormFocus::TargetAudience => FormFocus::PhoneModel,
            FormFocus::KeyFeatures => FormFocus::TargetAudience,
        }
    }
}

pub struct GeneratorForm {
    pub template_index: usize,
    pub phone_model: TextField,
    pub target_audience: TextField,
    pub key_features: TextField,
    pub focus: FormFocus,
    /// Prop: false while a request is in flight.
    pub submit_enabled: bool,
}

impl Default for GeneratorForm {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorForm {
    pub fn new() -> Self {
        Self {
            template_index: 0,
            phone_model: TextField::new(),
            target_audience: TextField::new(),
            key_features: TextField::new(),
            focus: FormFocus::ContentType,
            submit_enabled: true,
        }
    }

    /// Snapshot of the current field values for submission.
    pub fn submission(&self) -> Submission {
        Submission {
            template_index: self.template_index,
            phone_model: self.phone_model.text().to_string(),
            target_audience: self.target_audience.text().to_string(),
            key_features: self.key_features.text().to_string(),
        }
    }

    /// Brand picker callback target: overwrites the phone-model field.
    pub fn set_phone_model(&mut self, model: String) {
        self.phone_model.set_text(model);
    }

    fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FormFocus::ContentType => None,
            FormFocus::PhoneModel => Some(&mut self.phone_model),
            FormFocus::TargetAudience => Some(&mut self.target_audience),
            FormFocus::KeyFeatures => Some(&mut self.key_features),
        }
    }

    fn cycle_template(&mut self, forward: bool) {
        let len = PROMPT_TEMPLATES.len();
        self.template_index = if forward {
            (self.template_index + 1) % len
        } else {
            (self.template_index + len - 1) % len
        };
    }
}

impl EventHandler for GeneratorForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::FocusNext | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                None
            }
            TuiEvent::FocusPrev | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                None
            }
            TuiEvent::CursorLeft => {
                if self.focus == FormFocus::ContentType {
                    self.cycle_template(false);
                } else if let Some(field) = self.focused_field() {
                    field.move_left();
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.focus == FormFocus::ContentType {
                    self.cycle_template(true);
                } else if let Some(field) = self.focused_field() {
                    field.move_right();
                }
                None
            }
            TuiEvent::InputChar(c) => {
                if let Some(field) = self.focused_field() {
                    field.insert(*c);
                }
                None
            }
            TuiEvent::Paste(text) => {
                if let Some(field) = self.focused_field() {
                    field.insert_str(text);
                }
                None
            }
            TuiEvent::Backspace => {
                if let Some(field) = self.focused_field() {
                    field.backspace();
                }
                None
            }
            TuiEvent::Delete => {
                if let Some(field) = self.focused_field() {
                    field.delete();
                }
                None
            }
            TuiEvent::Home => {
                if let Some(field) = self.focused_field() {
                    field.move_home();
                }
                None
            }
            TuiEvent::End => {
                if let Some(field) = self.focused_field() {
                    field.move_end();
                }
                None
            }
            TuiEvent::Submit => {
                if self.submit_enabled {
                    Some(FormEvent::Submit(self.submission()))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl Component for GeneratorForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::Length;
        let [type_area, model_area, audience_area, features_area, submit_area] =
            Layout::vertical([Length(3), Length(3), Length(3), Length(3), Length(1)]).areas(area);

        self.render_content_type(frame, type_area);
        self.render_text_field(
            frame,
            model_area,
            FormFocus::PhoneModel,
            "Phone Model (Ctrl+B to browse brands)",
        );
        self.render_text_field(frame, audience_area, FormFocus::TargetAudience, "Target Audience");
        self.render_text_field(frame, features_area, FormFocus::KeyFeatures, "Key Features");
        self.render_submit_row(frame, submit_area);
    }
}

impl GeneratorForm {
    fn border_style(&self, focus: FormFocus) -> Style {
        if self.focus == focus {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn render_content_type(&self, frame: &mut Frame, area: Rect) {
        let template = &PROMPT_TEMPLATES[self.template_index];
        let style = self.border_style(FormFocus::ContentType);
        let block = Block::bordered().title("Content Type").border_style(style);
        let hint = if self.focus == FormFocus::ContentType {
            Span::styled("  ←/→ to change", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw("")
        };
        let line = Line::from(vec![Span::raw(format!("< {} >", template.label)), hint]);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_text_field(&self, frame: &mut Frame, area: Rect, focus: FormFocus, title: &str) {
        let field = match focus {
            FormFocus::PhoneModel => &self.phone_model,
            FormFocus::TargetAudience => &self.target_audience,
            FormFocus::KeyFeatures => &self.key_features,
            FormFocus::ContentType => unreachable!("content type is not a text field"),
        };
        let block = Block::bordered()
            .title(title)
            .border_style(self.border_style(focus));
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(field.text()).block(block), area);

        if self.focus == focus {
            frame.set_cursor_position(Position::new(
                inner.x + field.cursor_column().min(inner.width.saturating_sub(1)),
                inner.y,
            ));
        }
    }

    fn render_submit_row(&self, frame: &mut Frame, area: Rect) {
        let line = if self.submit_enabled {
            Line::from(Span::styled(
                "[ Generate Marketing Content ]  Enter",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                "[ Generating... ]",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ))
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}
