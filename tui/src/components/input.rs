use aura_core::Page;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::state::AppState;

/// Component for rendering the input panel
pub struct InputComponent;

/// Input text broken into display rows, with the cursor's row and column
#[derive(Debug, PartialEq, Eq)]
pub struct InputLayout {
    pub rows: Vec<String>,
    pub cursor_row: usize,
    pub cursor_col: usize,
}

impl InputComponent {
    /// Render the input area
    pub fn render(state: &mut AppState, f: &mut Frame, area: Rect) {
        let text_width = area.width.saturating_sub(2) as usize;
        let text_height = area.height.saturating_sub(2) as usize;

        let layout = Self::layout(&state.input, state.input_cursor, text_width);
        let total_rows = layout.rows.len();
        let max_scroll = total_rows.saturating_sub(text_height);

        // Keep the cursor row on screen
        if layout.cursor_row < state.input_scroll {
            state.input_scroll = layout.cursor_row;
        } else if text_height > 0 && layout.cursor_row >= state.input_scroll + text_height {
            state.input_scroll = layout.cursor_row + 1 - text_height;
        }
        let scroll_pos = state.input_scroll.min(max_scroll);

        let focused = state.focused_panel == 0 && !state.processing;
        let border_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let title = match (state.session.current(), focused) {
            (Page::Tool(tool), true) => format!(" {} input [FOCUSED] (Enter to run) ", tool),
            (Page::Tool(tool), false) => format!(" {} input ", tool),
            (Page::Dashboard, _) => " Input ".to_string(),
        };

        let widget = if state.input.is_empty() {
            Paragraph::new("Type or paste your text here...").style(Style::default().fg(Color::DarkGray))
        } else {
            let visible: Vec<String> = layout.rows.into_iter().skip(scroll_pos).take(text_height).collect();
            Paragraph::new(visible.join("\n"))
        };
        f.render_widget(
            widget.block(Block::default().borders(Borders::ALL).border_style(border_style).title(title)),
            area,
        );

        let visible_cursor_row = layout.cursor_row.saturating_sub(scroll_pos);
        if focused && state.cursor_visible && visible_cursor_row < text_height {
            let cursor_x = area.x + 1 + layout.cursor_col as u16;
            let cursor_y = area.y + 1 + visible_cursor_row as u16;
            if cursor_x < area.x + area.width - 1 && cursor_y < area.y + area.height - 1 {
                f.set_cursor(cursor_x, cursor_y);
            }
        }

        if total_rows > text_height {
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

    /// Hard-wrap `input` at `width` chars, honoring explicit newlines.
    /// `cursor` is a byte offset on a char boundary.
    pub fn layout(input: &str, cursor: usize, width: usize) -> InputLayout {
        let width = width.max(1);
        let mut rows = vec![String::new()];
        let mut cursor_row = 0;
        let mut cursor_col = 0;

        for (offset, ch) in input.char_indices() {
            if offset == cursor {
                cursor_row = rows.len() - 1;
                cursor_col = rows.last().map_or(0, |r| r.chars().count());
            }
            if ch == '\n' {
                rows.push(String::new());
                continue;
            }
            if rows.last().map_or(0, |r| r.chars().count()) >= width {
                rows.push(String::new());
                if offset == cursor {
                    cursor_row += 1;
                    cursor_col = 0;
                }
            }
            if let Some(row) = rows.last_mut() {
                row.push(ch);
            }
        }

        if cursor >= input.len() {
            cursor_row = rows.len() - 1;
            cursor_col = rows.last().map_or(0, |r| r.chars().count());
        }

        InputLayout { rows, cursor_row, cursor_col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_wraps_and_tracks_cursor_at_end() {
        let layout = InputComponent::layout("abcdefg", 7, 3);
        assert_eq!(layout.rows, vec!["abc", "def", "g"]);
        assert_eq!((layout.cursor_row, layout.cursor_col), (2, 1));
    }

    #[test]
    fn test_layout_explicit_newline() {
        let layout = InputComponent::layout("ab\ncd", 3, 10);
        assert_eq!(layout.rows, vec!["ab", "cd"]);
        assert_eq!((layout.cursor_row, layout.cursor_col), (1, 0));
    }

    #[test]
    fn test_layout_trailing_newline_puts_cursor_on_new_row() {
        let layout = InputComponent::layout("ab\n", 3, 10);
        assert_eq!(layout.rows, vec!["ab", ""]);
        assert_eq!((layout.cursor_row, layout.cursor_col), (1, 0));
    }

    #[test]
    fn test_layout_cursor_on_wrapped_char() {
        // Cursor before 'd', which starts the second row
        let layout = InputComponent::layout("abcdef", 3, 3);
        assert_eq!((layout.cursor_row, layout.cursor_col), (1, 0));
    }

    #[test]
    fn test_layout_multibyte() {
        let input = "héllo";
        let cursor = input.char_indices().nth(2).map(|(i, _)| i).unwrap();
        let layout = InputComponent::layout(input, cursor, 80);
        assert_eq!((layout.cursor_row, layout.cursor_col), (0, 2));
    }
}
