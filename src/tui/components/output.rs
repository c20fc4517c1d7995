//! # Output Panel Component
//!
//! Renders the request lifecycle. The `Phase` union means exactly one of
//! the idle hint, loading indicator, error message, or generated output is
//! ever on screen.
//!
//! Generated copy can be longer than the panel, so the Success state renders
//! into a scroll view; mouse wheel and PageUp/PageDown scroll it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::state::Phase;
use crate::generation::GenerationResult;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Persistent presentation state: scroll position survives redraws.
#[derive(Default)]
pub struct OutputPanelState {
    pub scroll_state: ScrollViewState,
}

impl OutputPanelState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for OutputPanelState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper; borrows the phase and the scroll state.
pub struct OutputPanel<'a> {
    phase: &'a Phase,
    state: &'a mut OutputPanelState,
    spinner_frame: usize,
}

impl<'a> OutputPanel<'a> {
    pub fn new(phase: &'a Phase, state: &'a mut OutputPanelState, spinner_frame: usize) -> Self {
        Self {
            phase,
            state,
            spinner_frame,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.phase {
            Phase::Idle => render_idle(frame, area),
            Phase::Loading => render_loading(frame, area, self.spinner_frame),
            Phase::Error(message) => render_error(frame, area, message),
            Phase::Success(result) => render_success(frame, area, result, self.state),
        }
    }
}

fn render_idle(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new("Fill in the form and press Enter to generate.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(hint, area);
}

fn render_loading(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(spinner, Style::default().fg(Color::Cyan)),
        Span::raw(" Generating marketing content..."),
    ]);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(paragraph, area);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .title("ERROR")
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(paragraph, area);
}

fn render_success(
    frame: &mut Frame,
    area: Rect,
    result: &GenerationResult,
    state: &mut OutputPanelState,
) {
    let footer = performance_lines(result);

    let block = Block::bordered()
        .title("Generated Marketing Content")
        .title_bottom(Line::from(" Ctrl+E Export ").right_aligned())
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [text_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(footer.len() as u16)])
            .areas(inner);

    // Wrap to the scroll-view width (one column reserved for the scrollbar)
    // so the content height is known up front.
    let content_width = text_area.width.saturating_sub(1).max(1);
    let lines: Vec<_> = textwrap::wrap(
        &result.output_text,
        textwrap::Options::new(content_width as usize).break_words(true),
    );
    let content_height = (lines.len() as u16).max(1);

    let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
    let text = lines.join("\n");
    scroll_view.render_widget(
        Paragraph::new(text),
        Rect::new(0, 0, content_width, content_height),
    );
    frame.render_stateful_widget(scroll_view, text_area, &mut state.scroll_state);

    frame.render_widget(
        Paragraph::new(footer).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        ),
        footer_area,
    );
}

/// The performance footer: time always, token usage only when reported.
fn performance_lines(result: &GenerationResult) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(format!(
        "Generation Time: {} ms",
        result.elapsed_ms
    ))];
    if let Some(tokens) = result.token_count {
        lines.push(Line::from(format!("Token Usage: {}", tokens)));
    }
    lines
}
