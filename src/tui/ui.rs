//! Page shell: composes the title bar, form, output panel, and help line.
//! Static layout only; every stateful decision lives in `App` or in the
//! individual components.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BrandPicker, OutputPanel, TitleBar, form::FORM_HEIGHT};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(FORM_HEIGHT), Min(0), Length(1)]);
    let [title_area, form_area, output_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.model_name.clone(), app.status_message.clone()).render(frame, title_area);

    tui.form.render(frame, form_area);

    OutputPanel::new(&app.phase, &mut tui.output, spinner_frame).render(frame, output_area);

    let help = Paragraph::new(Line::from(
        "Enter Generate   Tab Next Field   ←/→ Content Type   Ctrl+B Brands   Ctrl+E Export   Ctrl+C Quit",
    ))
    .style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    );
    frame.render_widget(help, help_area);

    // Overlay pass: the brand picker draws over everything else.
    if let Some(ref mut picker) = tui.brand_picker {
        BrandPicker::new(picker).render(frame, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Phase;
    use crate::generation::GenerationResult;
    use crate::test_support::test_app;
    use crate::tui::components::BrandPickerState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_idle() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("Adcopy Studio"));
        assert!(text.contains("Content Type"));
        assert!(text.contains("press Enter to generate"));
    }

    #[test]
    fn test_draw_ui_success_shows_output() {
        let mut app = test_app();
        app.phase = Phase::Success(GenerationResult {
            output_text: "Meet the future of mobile.".to_string(),
            elapsed_ms: 100,
            token_count: Some(7),
        });
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("Meet the future of mobile."));
        assert!(text.contains("Generation Time: 100 ms"));
    }

    #[test]
    fn test_draw_ui_with_brand_picker_overlay() {
        let app = test_app();
        let mut tui = TuiState::new();
        tui.brand_picker = Some(BrandPickerState::new());
        let text = render(&app, &mut tui);
        assert!(text.contains("Phone Brands"));
        assert!(text.contains("Samsung"));
    }
}
