use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::state::AppState;

/// Security & settings panel docked on the right
pub struct SidebarComponent;

impl SidebarComponent {
    pub fn render(state: &AppState, f: &mut Frame) {
        let area = f.size();
        let width = (area.width * 40 / 100).max(30).min(area.width);
        let panel = Rect {
            x: area.width - width,
            y: area.y,
            width,
            height: area.height,
        };
        f.render_widget(Clear, panel);

        let current = match state.session.credential() {
            Some(credential) => Span::styled(credential.masked(), Style::default().fg(Color::Green)),
            None => Span::styled("not set", Style::default().fg(Color::Red)),
        };

        let lines = vec![
            Line::from(Span::styled(
                "Google API key",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![Span::raw("Current: "), current]),
            Line::from(""),
            Line::from("New key:"),
            Line::from(Span::styled(
                format!("{}█", "•".repeat(state.key_input.chars().count())),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "The key stays in memory for this session only. It is never written to disk or logged.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Get a free key at https://aistudio.google.com/app/apikey",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Enter Save • empty Enter clears • Esc Cancel",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let sidebar = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                    .title(" 🔒 Security & Settings ")
                    .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(sidebar, panel);
    }
}
