//! # Brand Picker Component
//!
//! Full-screen overlay for choosing a phone brand and model. Opened with
//! Ctrl+B. Selecting a brand is purely local; only choosing a model is
//! reported upward, and the chosen string lands in the form's phone-model
//! field.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BrandPickerState` lives in `TuiState`
//! - `BrandPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};

use crate::core::catalog::{PHONE_BRANDS, PhoneBrand};
use crate::tui::event::TuiEvent;

/// Which pane owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerPane {
    Brands,
    Models,
}

/// Persistent state for the brand picker overlay.
pub struct BrandPickerState {
    brands: &'static [PhoneBrand],
    /// Highlight position in the brands pane.
    pub brand_index: usize,
    /// Locally selected brand (stays visually active across pane switches).
    pub selected_brand: Option<usize>,
    pub model_index: usize,
    pane: PickerPane,
    brand_list_state: ListState,
    model_list_state: ListState,
}

impl Default for BrandPickerState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrandPickerState {
    pub fn new() -> Self {
        let mut brand_list_state = ListState::default();
        brand_list_state.select(Some(0));
        Self {
            brands: PHONE_BRANDS,
            brand_index: 0,
            selected_brand: None,
            model_index: 0,
            pane: PickerPane::Brands,
            brand_list_state,
            model_list_state: ListState::default(),
        }
    }

    /// Handle a key event, returning a BrandPickerEvent if the overlay
    /// should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<BrandPickerEvent> {
        match self.pane {
            PickerPane::Brands => match event {
                TuiEvent::Escape => Some(BrandPickerEvent::Dismiss),
                TuiEvent::CursorUp => {
                    self.brand_index = self.brand_index.saturating_sub(1);
                    self.brand_list_state.select(Some(self.brand_index));
                    None
                }
                TuiEvent::CursorDown => {
                    self.brand_index = (self.brand_index + 1).min(self.brands.len() - 1);
                    self.brand_list_state.select(Some(self.brand_index));
                    None
                }
                TuiEvent::Submit | TuiEvent::CursorRight => {
                    // Local selection only; the parent is not notified.
                    self.selected_brand = Some(self.brand_index);
                    self.model_index = 0;
                    self.model_list_state.select(Some(0));
                    self.pane = PickerPane::Models;
                    None
                }
                _ => None,
            },
            PickerPane::Models => {
                let brands = self.brands;
                let brand = &brands[self.selected_brand.unwrap_or(self.brand_index)];
                match event {
                    TuiEvent::Escape | TuiEvent::CursorLeft => {
                        // Back to brands; the brand selection stays active.
                        self.pane = PickerPane::Brands;
                        None
                    }
                    TuiEvent::CursorUp => {
                        self.model_index = self.model_index.saturating_sub(1);
                        self.model_list_state.select(Some(self.model_index));
                        None
                    }
                    TuiEvent::CursorDown => {
                        self.model_index = (self.model_index + 1).min(brand.models.len() - 1);
                        self.model_list_state.select(Some(self.model_index));
                        None
                    }
                    TuiEvent::Submit => brand
                        .models
                        .get(self.model_index)
                        .map(|model| BrandPickerEvent::Select(model.to_string())),
                    _ => None,
                }
            }
        }
    }
}

/// Events emitted by the brand picker.
#[derive(Debug, Clone, PartialEq)]
pub enum BrandPickerEvent {
    /// A model was chosen; the string goes into the phone-model field.
    Select(String),
    Dismiss,
}

/// Transient render wrapper for the brand picker overlay.
pub struct BrandPicker<'a> {
    state: &'a mut BrandPickerState,
}

impl<'a> BrandPicker<'a> {
    pub fn new(state: &'a mut BrandPickerState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 60, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let help_text = " Enter Select  Esc Back ";

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Phone Brands ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [brands_area, models_area] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(inner);

        self.render_brands(frame, brands_area);
        self.render_models(frame, models_area);
    }

    fn render_brands(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.state.pane == PickerPane::Brands;
        let items: Vec<ListItem> = self
            .state
            .brands
            .iter()
            .enumerate()
            .map(|(i, brand)| {
                let is_selected = self.state.selected_brand == Some(i);
                let is_highlighted = focused && i == self.state.brand_index;

                let style = if is_highlighted {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_selected {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if is_selected { " *" } else { "" };

                let name_width = area.width.saturating_sub(4) as usize;
                ListItem::new(vec![
                    Line::from(Span::styled(
                        format!("{}{}", truncate_str(brand.name, name_width), marker),
                        style,
                    )),
                    Line::from(Span::styled(
                        truncate_str(brand.logo_url, name_width),
                        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
                    )),
                ])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_stateful_widget(list, area, &mut self.state.brand_list_state);
    }

    fn render_models(&mut self, frame: &mut Frame, area: Rect) {
        let Some(brand_index) = self.state.selected_brand else {
            let hint = Paragraph::new("Enter to browse models")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(hint, area);
            return;
        };

        let brand = &self.state.brands[brand_index];
        let focused = self.state.pane == PickerPane::Models;

        let items: Vec<ListItem> = brand
            .models
            .iter()
            .enumerate()
            .map(|(i, model)| {
                let style = if focused && i == self.state.model_index {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(Span::styled(*model, style)))
            })
            .collect();

        let list = List::new(items).block(
            Block::default().title(format!(" {} Models ", brand.name)),
        );
        frame.render_stateful_widget(list, area, &mut self.state.model_list_state);
    }
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.len() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        format!("{}...", &s[..max_width - 3])
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
