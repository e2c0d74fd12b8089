use aura_core::{Page, ToolName};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::state::{AppState, DASHBOARD_COLUMNS};

/// Handles input events for the application
pub struct InputHandler;

impl InputHandler {
    /// Handle input events (keyboard, mouse and paste)
    pub async fn handle_event(state: &mut AppState, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Self::handle_key_event(state, key.code, key.modifiers).await;
            }
            Event::Mouse(mouse_event) => {
                Self::handle_mouse_event(state, mouse_event);
            }
            Event::Paste(text) => Self::handle_paste(state, &text),
            _ => {}
        }
    }

    /// Bracketed paste: the text lands as-is, newlines included
    fn handle_paste(state: &mut AppState, text: &str) {
        if state.settings_open {
            state.key_input.extend(text.chars().filter(|c| !c.is_control()));
            return;
        }
        if state.command_palette_open || state.processing || state.focused_panel != 0 {
            return;
        }
        if state.session.navigator().is_dashboard() {
            return;
        }

        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        state.input.insert_str(state.input_cursor, &text);
        state.input_cursor += text.len();
    }

    async fn handle_key_event(state: &mut AppState, key_code: KeyCode, modifiers: KeyModifiers) {
        if key_code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            state.should_quit = true;
            return;
        }

        // Overlays take every key while open
        if state.settings_open {
            Self::handle_settings_key(state, key_code);
            return;
        }
        if state.command_palette_open {
            Self::handle_palette_key(state, key_code).await;
            return;
        }

        if key_code == KeyCode::Char('k') && modifiers.contains(KeyModifiers::CONTROL) {
            Self::open_settings(state);
            return;
        }

        match state.session.current() {
            Page::Dashboard => Self::handle_dashboard_key(state, key_code),
            Page::Tool(tool) => Self::handle_workspace_key(state, tool, key_code, modifiers).await,
        }
    }

    fn handle_dashboard_key(state: &mut AppState, key_code: KeyCode) {
        let count = ToolName::ALL.len();
        match key_code {
            KeyCode::Char('q') => state.should_quit = true,
            KeyCode::Char('/') => Self::open_palette(state),
            KeyCode::Left => {
                state.dashboard_selected = state.dashboard_selected.saturating_sub(1);
            }
            KeyCode::Right => {
                state.dashboard_selected = (state.dashboard_selected + 1).min(count - 1);
            }
            KeyCode::Up => {
                state.dashboard_selected = state.dashboard_selected.saturating_sub(DASHBOARD_COLUMNS);
            }
            KeyCode::Down => {
                if state.dashboard_selected + DASHBOARD_COLUMNS < count {
                    state.dashboard_selected += DASHBOARD_COLUMNS;
                }
            }
            KeyCode::Enter => {
                let tool = state.selected_tool();
                state.navigate(tool);
            }
            _ => {}
        }
    }

    async fn handle_workspace_key(state: &mut AppState, tool: ToolName, key_code: KeyCode, modifiers: KeyModifiers) {
        match key_code {
            KeyCode::Char('b') if modifiers.contains(KeyModifiers::CONTROL) => {
                state.navigate(Page::Dashboard);
            }
            KeyCode::Tab => {
                state.focused_panel = (state.focused_panel + 1) % 2;
            }
            KeyCode::Esc => {
                if state.input.is_empty() {
                    state.navigate(Page::Dashboard);
                } else {
                    state.input.clear();
                    state.input_cursor = 0;
                    state.focused_panel = 0;
                }
            }
            KeyCode::PageUp => {
                state.result_scroll = state.result_scroll.saturating_sub(10);
            }
            KeyCode::PageDown => {
                state.result_scroll = state.result_scroll.saturating_add(10);
            }
            KeyCode::Up if state.focused_panel == 1 => {
                state.result_scroll = state.result_scroll.saturating_sub(1);
            }
            KeyCode::Down if state.focused_panel == 1 => {
                state.result_scroll = state.result_scroll.saturating_add(1);
            }
            _ if state.focused_panel != 0 || state.processing => {}
            KeyCode::Enter if modifiers.contains(KeyModifiers::ALT) => {
                Self::insert_char(state, '\n');
            }
            KeyCode::Enter => {
                Self::submit_input(state, tool).await;
            }
            KeyCode::Char('/') if state.input.is_empty() => {
                Self::open_palette(state);
            }
            KeyCode::Char(c) => Self::insert_char(state, c),
            KeyCode::Backspace => Self::delete_char(state),
            KeyCode::Left => Self::move_cursor_left(state),
            KeyCode::Right => Self::move_cursor_right(state),
            KeyCode::Home => state.input_cursor = 0,
            KeyCode::End => state.input_cursor = state.input.len(),
            KeyCode::Up => Self::move_cursor_up(state),
            KeyCode::Down => Self::move_cursor_down(state),
            _ => {}
        }
    }

    fn handle_mouse_event(state: &mut AppState, mouse_event: MouseEvent) {
        if state.session.navigator().is_dashboard() {
            return;
        }
        match mouse_event.kind {
            MouseEventKind::ScrollUp => {
                state.result_scroll = state.result_scroll.saturating_sub(3);
            }
            MouseEventKind::ScrollDown => {
                state.result_scroll = state.result_scroll.saturating_add(3);
            }
            _ => {}
        }
    }

    fn handle_settings_key(state: &mut AppState, key_code: KeyCode) {
        match key_code {
            KeyCode::Esc => {
                state.settings_open = false;
                state.key_input.clear();
            }
            KeyCode::Enter => {
                let entered = std::mem::take(&mut state.key_input);
                state.session.set_credential(entered);
                state.settings_open = false;
                state.notice = Some(if state.session.credential().is_some() {
                    "API key saved for this session.".to_string()
                } else {
                    "API key cleared.".to_string()
                });
            }
            KeyCode::Backspace => {
                state.key_input.pop();
            }
            KeyCode::Char(c) if !c.is_control() => {
                state.key_input.push(c);
            }
            _ => {}
        }
    }

    async fn handle_palette_key(state: &mut AppState, key_code: KeyCode) {
        match key_code {
            KeyCode::Esc => Self::close_palette(state),
            KeyCode::Up => {
                state.command_palette_selected = state.command_palette_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let filtered = state.filtered_commands();
                if state.command_palette_selected < filtered.len().saturating_sub(1) {
                    state.command_palette_selected += 1;
                }
            }
            KeyCode::Enter => Self::execute_selected_command(state).await,
            KeyCode::Backspace => {
                if state.command_palette_filter.pop().is_some() {
                    state.command_palette_selected = 0;
                } else {
                    state.command_palette_open = false;
                }
            }
            KeyCode::Char(c) if c.is_alphanumeric() || c == '/' || c == '-' || c == '_' => {
                state.command_palette_filter.push(c);
                state.command_palette_selected = 0;
            }
            _ => {}
        }
    }

    /// Dispatch the current input for the active tool.
    ///
    /// The call runs on a spawned task; `processing` stays set until the
    /// `ToolCompleted` event comes back, so only one invocation is ever in
    /// flight.
    async fn submit_input(state: &mut AppState, tool: ToolName) {
        if state.processing {
            return;
        }

        state.processing = true;
        state.last_result = None;
        state.result_scroll = 0;
        state.notice = None;

        let dispatcher = state.dispatcher.clone();
        let credential = state.session.credential().cloned();
        let input = state.input.clone();
        debug!(tool = %tool, "submitting input");
        tokio::spawn(async move {
            dispatcher.run(tool, &input, credential.as_ref()).await;
        });
    }

    /// Run a palette command
    fn run_command(state: &mut AppState, name: &str) {
        match name {
            "/quit" | "/q" => state.should_quit = true,
            "/dashboard" => state.navigate(Page::Dashboard),
            "/key" => Self::open_settings(state),
            "/clear" => {
                state.clear_workspace();
                state.notice = None;
            }
            "/info" => {
                let info = state.dispatcher.text_adapter_info();
                let models = state.dispatcher.models();
                state.notice = Some(format!(
                    "{} {} ({}) | fast: {} | capable: {} | images: {}",
                    info.name,
                    info.version,
                    info.description,
                    models.fast,
                    models.capable,
                    state.dispatcher.image_adapter().base_url()
                ));
            }
            other => debug!("ignoring unknown command {}", other),
        }
    }

    fn open_settings(state: &mut AppState) {
        state.settings_open = true;
        state.key_input.clear();
    }

    fn open_palette(state: &mut AppState) {
        state.command_palette_open = true;
        state.command_palette_selected = 0;
        state.command_palette_filter.clear();
    }

    fn close_palette(state: &mut AppState) {
        state.command_palette_open = false;
        state.command_palette_filter.clear();
        state.command_palette_selected = 0;
    }

    /// Insert a character at the cursor position
    fn insert_char(state: &mut AppState, ch: char) {
        if state.input_cursor <= state.input.len() {
            state.input.insert(state.input_cursor, ch);
            state.input_cursor += ch.len_utf8();
        }
    }

    /// Delete character before cursor
    fn delete_char(state: &mut AppState) {
        if let Some((index, _)) = state.input[..state.input_cursor].char_indices().next_back() {
            state.input.remove(index);
            state.input_cursor = index;
        }
    }

    fn move_cursor_left(state: &mut AppState) {
        if let Some((index, _)) = state.input[..state.input_cursor].char_indices().next_back() {
            state.input_cursor = index;
        }
    }

    fn move_cursor_right(state: &mut AppState) {
        if let Some(ch) = state.input[state.input_cursor..].chars().next() {
            state.input_cursor += ch.len_utf8();
        }
    }

    /// Move to the same column on the previous line, or to the start
    fn move_cursor_up(state: &mut AppState) {
        let before = &state.input[..state.input_cursor];
        let Some(line_start) = before.rfind('\n').map(|p| p + 1) else {
            state.input_cursor = 0;
            return;
        };
        let column = before[line_start..].chars().count();
        let prev_start = state.input[..line_start - 1].rfind('\n').map(|p| p + 1).unwrap_or(0);
        state.input_cursor = Self::offset_at_column(&state.input, prev_start, line_start - 1, column);
    }

    /// Move to the same column on the next line, or to the end
    fn move_cursor_down(state: &mut AppState) {
        let Some(next_start) = state.input[state.input_cursor..].find('\n').map(|p| state.input_cursor + p + 1) else {
            state.input_cursor = state.input.len();
            return;
        };
        let line_start = state.input[..state.input_cursor].rfind('\n').map(|p| p + 1).unwrap_or(0);
        let column = state.input[line_start..state.input_cursor].chars().count();
        let next_end = state.input[next_start..].find('\n').map(|p| next_start + p).unwrap_or(state.input.len());
        state.input_cursor = Self::offset_at_column(&state.input, next_start, next_end, column);
    }

    /// Byte offset of `column` chars into `text[start..end]`, clamped to `end`
    fn offset_at_column(text: &str, start: usize, end: usize, column: usize) -> usize {
        text[start..end]
            .char_indices()
            .nth(column)
            .map(|(i, _)| start + i)
            .unwrap_or(end)
    }

    /// Execute the currently selected command
    async fn execute_selected_command(state: &mut AppState) {
        let selected = state.filtered_commands()
            .get(state.command_palette_selected)
            .map(|cmd| cmd.name.clone());
        Self::close_palette(state);
        if let Some(name) = selected {
            Self::run_command(state, &name);
        }
    }
}
