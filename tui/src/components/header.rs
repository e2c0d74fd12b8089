use aura_core::Page;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::AppState;

/// Component for the title bar and the tool banner
pub struct HeaderComponent;

impl HeaderComponent {
    /// Render the one-line title bar
    pub fn render(state: &AppState, f: &mut Frame, area: Rect) {
        let page = state.session.current();
        let key_status = match state.session.credential() {
            Some(_) => Span::styled("● key set", Style::default().fg(Color::Green)),
            None => Span::styled("○ no key", Style::default().fg(Color::Red)),
        };

        let line = Line::from(vec![
            Span::styled(
                " ✦ Aura AI Studio ",
                Style::default().fg(Color::Black).bg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(page.to_string(), Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            key_status,
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    /// Render the banner above a tool workspace
    pub fn render_tool_banner(state: &AppState, f: &mut Frame, area: Rect) {
        let Page::Tool(tool) = state.session.current() else {
            return;
        };
        let Some(definition) = state.dispatcher.registry().get(&tool) else {
            return;
        };

        let banner = Paragraph::new(Line::from(vec![
            Span::raw(format!("{} ", definition.icon)),
            Span::styled(
                definition.name.display_name(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", definition.description), Style::default().fg(Color::Gray)),
        ]))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(banner, area);
    }
}
