use anyhow::Result;
use aura_core::{AppEvent, Dispatcher, Page, Session};
use crossterm::event;
use ratatui::{backend::Backend, Frame, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

use crate::{
    components::{
        CommandPaletteComponent, DashboardComponent, HeaderComponent, InputComponent, ResultComponent,
        SidebarComponent, StatusComponent,
    },
    handlers::{EventHandler, InputHandler},
    state::AppState,
    utils::{layout, terminal},
};

/// Main application
pub struct App {
    state: AppState,
}

impl App {
    /// Create a new application instance
    pub fn new(session: Session, dispatcher: Arc<Dispatcher>, event_receiver: mpsc::UnboundedReceiver<AppEvent>) -> Self {
        Self {
            state: AppState::new(session, dispatcher, event_receiver),
        }
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = terminal::setup()?;
        info!("TUI initialized, starting main loop");

        let result = self.run_app(&mut terminal).await;

        terminal::restore(&mut terminal)?;
        result
    }

    async fn run_app<B: Backend + std::io::Write>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.state.update_cursor_blink();
            terminal.draw(|f| self.ui(f))?;

            tokio::select! {
                terminal_event = async {
                    if event::poll(Duration::from_millis(0)).unwrap_or(false) {
                        event::read().ok()
                    } else {
                        None
                    }
                } => {
                    if let Some(event) = terminal_event {
                        InputHandler::handle_event(&mut self.state, event).await;
                    }
                },

                // Results from spawned invocations
                app_event = self.state.event_receiver.recv() => {
                    if let Some(event) = app_event {
                        EventHandler::handle_event(&mut self.state, event).await;
                    }
                },

                _ = tokio::time::sleep(Duration::from_millis(50)) => {},
            }

            if self.state.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Draw the user interface
    fn ui(&mut self, f: &mut Frame) {
        let main_chunks = layout::create_main_layout(f.size());

        HeaderComponent::render(&self.state, f, main_chunks[0]);
        match self.state.session.current() {
            Page::Dashboard => DashboardComponent::render(&self.state, f, main_chunks[1]),
            Page::Tool(_) => {
                let workspace = layout::create_workspace_layout(main_chunks[1]);
                HeaderComponent::render_tool_banner(&self.state, f, workspace[0]);
                InputComponent::render(&mut self.state, f, workspace[1]);
                ResultComponent::render(&mut self.state, f, workspace[2]);
            }
        }
        StatusComponent::render(&self.state, f, main_chunks[2]);

        if self.state.command_palette_open {
            CommandPaletteComponent::render(&self.state, f);
        }
        if self.state.settings_open {
            SidebarComponent::render(&self.state, f);
        }
    }
}
