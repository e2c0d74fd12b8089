use aura_core::{AppEvent, Dispatcher, Page, Session, ToolName, ToolResult};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Dashboard grid width, matching the five-column layout of the studio
pub const DASHBOARD_COLUMNS: usize = 5;

/// Command for the command palette
#[derive(Debug, Clone)]
pub struct Command {
    pub name: String,
    pub description: String,
}

/// Last result shown in a tool workspace
#[derive(Debug, Clone)]
pub struct ShownResult {
    pub tool: ToolName,
    pub result: ToolResult,
}

/// Application state
pub struct AppState {
    /// Per-user session (page + credential)
    pub session: Session,

    /// Shared dispatcher; invocations run on spawned tasks
    pub dispatcher: Arc<Dispatcher>,

    /// Current input text
    pub input: String,

    /// Cursor position in input text (byte index)
    pub input_cursor: usize,

    /// Whether the application should quit
    pub should_quit: bool,

    /// Whether an invocation is in flight
    pub processing: bool,

    /// Event receiver for handling app events
    pub event_receiver: mpsc::UnboundedReceiver<AppEvent>,

    /// Result panel scroll state
    pub result_scroll: usize,

    /// Input scroll state (for multi-line input)
    pub input_scroll: usize,

    /// Currently focused panel (0 = input, 1 = result)
    pub focused_panel: usize,

    /// Selected tile on the dashboard
    pub dashboard_selected: usize,

    /// Result of the most recent invocation on the current page
    pub last_result: Option<ShownResult>,

    /// Whether cursor is visible (for blinking effect)
    pub cursor_visible: bool,

    /// Last time cursor blinked
    pub last_cursor_blink: Instant,

    /// Command palette state
    pub command_palette_open: bool,

    /// Currently selected command in palette
    pub command_palette_selected: usize,

    /// Filter text for command palette
    pub command_palette_filter: String,

    /// Available commands
    pub available_commands: Vec<Command>,

    /// Settings sidebar with the key entry field
    pub settings_open: bool,

    /// Key being typed in the settings sidebar, never rendered in clear
    pub key_input: String,

    /// One-line notice for the status bar
    pub notice: Option<String>,
}

impl AppState {
    /// Create a new application state
    pub fn new(session: Session, dispatcher: Arc<Dispatcher>, event_receiver: mpsc::UnboundedReceiver<AppEvent>) -> Self {
        let available_commands = vec![
            Command {
                name: "/dashboard".to_string(),
                description: "Return to the dashboard".to_string(),
            },
            Command {
                name: "/key".to_string(),
                description: "Open security & settings to enter your Google API key".to_string(),
            },
            Command {
                name: "/clear".to_string(),
                description: "Clear the input and the last result".to_string(),
            },
            Command {
                name: "/info".to_string(),
                description: "Show the text service and the models in use".to_string(),
            },
            Command {
                name: "/quit".to_string(),
                description: "Exit the application".to_string(),
            },
        ];

        Self {
            session,
            dispatcher,
            input: String::new(),
            input_cursor: 0,
            should_quit: false,
            processing: false,
            event_receiver,
            result_scroll: 0,
            input_scroll: 0,
            focused_panel: 0,
            dashboard_selected: 0,
            last_result: None,
            cursor_visible: true,
            last_cursor_blink: Instant::now(),
            command_palette_open: false,
            command_palette_selected: 0,
            command_palette_filter: String::new(),
            available_commands,
            settings_open: false,
            key_input: String::new(),
            notice: None,
        }
    }

    /// Update cursor blinking state
    pub fn update_cursor_blink(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_cursor_blink).as_millis() >= 500 {
            self.cursor_visible = !self.cursor_visible;
            self.last_cursor_blink = now;
        }
    }

    /// Switch page and reset the workspace
    pub fn navigate(&mut self, page: impl Into<Page>) {
        let page = page.into();
        if let Page::Tool(tool) = page {
            if let Some(index) = ToolName::ALL.iter().position(|t| *t == tool) {
                self.dashboard_selected = index;
            }
        }
        self.session.navigate(page);
        self.clear_workspace();
    }

    pub fn clear_workspace(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
        self.input_scroll = 0;
        self.result_scroll = 0;
        self.focused_panel = 0;
        self.last_result = None;
    }

    /// Palette commands matching the current filter
    pub fn filtered_commands(&self) -> Vec<&Command> {
        let filter = self.command_palette_filter.to_lowercase();
        self.available_commands
            .iter()
            .filter(|cmd| {
                filter.is_empty()
                    || cmd.name.to_lowercase().contains(&filter)
                    || cmd.description.to_lowercase().contains(&filter)
            })
            .collect()
    }

    /// Tool under the dashboard selection
    pub fn selected_tool(&self) -> ToolName {
        ToolName::ALL[self.dashboard_selected.min(ToolName::ALL.len() - 1)]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use aura_core::{EventBus, ImageAdapter, MockTextAdapter};

    pub(crate) fn test_state() -> AppState {
        let bus = EventBus::new();
        let dispatcher = Dispatcher::new(Arc::new(MockTextAdapter::new()), ImageAdapter::default())
            .with_event_sender(bus.sender());
        AppState::new(Session::new(), Arc::new(dispatcher), bus.into_receiver())
    }

    #[test]
    fn test_starts_on_dashboard() {
        let state = test_state();
        assert_eq!(state.session.current(), Page::Dashboard);
        assert_eq!(state.selected_tool(), ToolName::AiDetector);
    }

    #[test]
    fn test_navigate_resets_workspace() {
        let mut state = test_state();
        state.input = "leftover".to_string();
        state.input_cursor = 8;
        state.last_result = Some(ShownResult { tool: ToolName::Grammar, result: ToolResult::text("x") });

        state.navigate(ToolName::Summarizer);

        assert_eq!(state.session.current(), Page::Tool(ToolName::Summarizer));
        assert_eq!(state.selected_tool(), ToolName::Summarizer);
        assert!(state.input.is_empty());
        assert!(state.last_result.is_none());
    }
}
