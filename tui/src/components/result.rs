use aura_core::{ResultKind, ToolResult};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::markdown::{parse_markdown, wrap_lines};
use crate::state::AppState;

/// Component for rendering the result panel of a tool workspace
pub struct ResultComponent;

impl ResultComponent {
    /// Render the last result, or a placeholder
    pub fn render(state: &mut AppState, f: &mut Frame, area: Rect) {
        let available_width = area.width.saturating_sub(4) as usize;

        let lines = match (&state.last_result, state.processing) {
            (_, true) => vec![Line::from(Span::styled(
                "Processing...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            ))],
            (Some(shown), false) => Self::result_lines(&shown.result, available_width),
            (None, false) => vec![Line::from(Span::styled(
                "Results appear here. Type your text below and press Enter.",
                Style::default().fg(Color::DarkGray),
            ))],
        };

        let content_height = lines.len();
        let visible_height = area.height.saturating_sub(2) as usize;
        let max_scroll = content_height.saturating_sub(visible_height);
        let scroll_pos = state.result_scroll.min(max_scroll);
        state.result_scroll = scroll_pos;

        let visible_lines: Vec<Line> = lines.into_iter().skip(scroll_pos).take(visible_height).collect();

        let border_style = if state.focused_panel == 1 {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let title = if state.focused_panel == 1 { " Result [FOCUSED] " } else { " Result " };

        let panel = Paragraph::new(Text::from(visible_lines))
            .block(Block::default().borders(Borders::ALL).border_style(border_style).title(title));
        f.render_widget(panel, area);

        if content_height > visible_height {
            let scrollbar = Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));
            let mut scrollbar_state = ScrollbarState::new(max_scroll.max(1)).position(scroll_pos);
            f.render_stateful_widget(
                scrollbar,
                area.inner(&ratatui::layout::Margin { vertical: 1, horizontal: 0 }),
                &mut scrollbar_state,
            );
        }
    }

    /// Styled lines for a result, wrapped to `width`
    pub fn result_lines(result: &ToolResult, width: usize) -> Vec<Line<'static>> {
        let lines = match result.kind {
            ResultKind::Text => parse_markdown(&result.payload),
            ResultKind::ImageUrl => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        "Image ready. Open the link below in a browser:",
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                ];
                lines.extend(Self::url_rows(&result.payload, width));
                if let Some(caption) = result.caption() {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        caption.to_string(),
                        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                    )));
                }
                lines
            }
            ResultKind::Warning => Self::plain_lines(&result.payload, Style::default().fg(Color::Yellow)),
            ResultKind::Error => Self::plain_lines(&result.payload, Style::default().fg(Color::Red)),
        };

        // URL rows are already cut to width
        if result.kind == ResultKind::ImageUrl {
            lines
        } else {
            wrap_lines(lines, width)
        }
    }

    /// The URL cut into `width`-char rows with nothing dropped, so
    /// selecting the rows copies it whole
    fn url_rows(url: &str, width: usize) -> Vec<Line<'static>> {
        let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);
        let chars: Vec<char> = url.chars().collect();
        chars
            .chunks(width.max(1))
            .map(|row| Line::from(Span::styled(row.iter().collect::<String>(), style)))
            .collect()
    }

    fn plain_lines(content: &str, style: Style) -> Vec<Line<'static>> {
        content
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), style)))
            .collect()
    }
}
