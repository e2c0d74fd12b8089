use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{AppState, DASHBOARD_COLUMNS};

/// Component for rendering the tool grid
pub struct DashboardComponent;

impl DashboardComponent {
    pub fn render(state: &AppState, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)].as_ref())
            .split(area);

        let intro = Paragraph::new(vec![
            Line::from(Span::styled(
                "Choose a tool",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Arrows to move, Enter to open, Ctrl+K for your API key, '/' for commands",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        f.render_widget(intro, chunks[0]);

        let definitions = state.dispatcher.registry().get_all();
        let row_count = definitions.len().div_ceil(DASHBOARD_COLUMNS);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, row_count.max(1) as u32); row_count])
            .split(chunks[1]);

        for (row_index, row_area) in rows.iter().enumerate() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, DASHBOARD_COLUMNS as u32); DASHBOARD_COLUMNS])
                .split(*row_area);

            for (column_index, tile_area) in columns.iter().enumerate() {
                let index = row_index * DASHBOARD_COLUMNS + column_index;
                let Some(definition) = definitions.get(index) else {
                    continue;
                };
                let selected = index == state.dashboard_selected;

                let border_style = if selected {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let name_style = if selected {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                };

                let text = Text::from(vec![
                    Line::from(Span::raw(definition.icon)),
                    Line::from(Span::styled(definition.name.display_name(), name_style)),
                    Line::from(""),
                    Line::from(Span::styled(definition.description, Style::default().fg(Color::Gray))),
                ]);
                let tile = Paragraph::new(text)
                    .block(Block::default().borders(Borders::ALL).border_style(border_style))
                    .wrap(Wrap { trim: true });
                f.render_widget(tile, *tile_area);
            }
        }
    }
}
