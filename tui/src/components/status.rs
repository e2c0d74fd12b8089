use aura_core::Page;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::state::AppState;

/// Component for rendering the status line
pub struct StatusComponent;

impl StatusComponent {
    /// Render the status line
    pub fn render(state: &AppState, f: &mut Frame, area: Rect) {
        let (status_text, color) = if state.processing {
            ("● Processing... | Tab to switch, PgUp/PgDn to scroll".to_string(), Color::Yellow)
        } else if let Some(notice) = &state.notice {
            (notice.clone(), Color::Cyan)
        } else {
            let hints = match state.session.current() {
                Page::Dashboard => "Ready | Enter to open | Ctrl+K key | / commands | q to quit",
                Page::Tool(_) => "Ready | Enter to run, Alt+Enter newline | Esc back | Ctrl+K key | Tab to switch",
            };
            (hints.to_string(), Color::Green)
        };

        f.render_widget(Paragraph::new(status_text).style(Style::default().fg(color)), area);
    }
}
