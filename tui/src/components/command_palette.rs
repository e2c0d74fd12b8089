use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::state::AppState;

/// Component for rendering the command palette overlay
pub struct CommandPaletteComponent;

impl CommandPaletteComponent {
    /// Render the command palette centered over the screen
    pub fn render(state: &AppState, f: &mut Frame) {
        let area = f.size();
        let popup_width = area.width * 50 / 100;
        let popup_height = (area.height * 50 / 100).max(8).min(area.height);
        let popup_area = Rect {
            x: (area.width - popup_width) / 2,
            y: (area.height - popup_height) / 2,
            width: popup_width,
            height: popup_height,
        };
        f.render_widget(Clear, popup_area);

        let filter_hint = if state.command_palette_filter.is_empty() {
            "(type to filter)".to_string()
        } else {
            format!("(filter: {})", state.command_palette_filter)
        };
        let mut lines = vec![
            Line::from(Span::styled(
                format!("Commands {}", filter_hint),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        let filtered = state.filtered_commands();
        if filtered.is_empty() {
            lines.push(Line::from(Span::styled("No matching commands found", Style::default().fg(Color::Red))));
        }
        for (i, cmd) in filtered.iter().enumerate() {
            let selected = i == state.command_palette_selected;
            let style = if selected {
                Style::default().bg(Color::DarkGray).fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(if selected { "► " } else { "  " }, style),
                Span::styled(
                    format!("{:<12}", cmd.name),
                    style.fg(if selected { Color::Yellow } else { Color::Green }),
                ),
                Span::styled(
                    cmd.description.clone(),
                    style.fg(if selected { Color::White } else { Color::Gray }),
                ),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "↑↓ Navigate • Enter Select • Esc Close",
            Style::default().fg(Color::DarkGray),
        )));

        let popup = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                    .title(" Commands ")
                    .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(popup, popup_area);
    }
}
