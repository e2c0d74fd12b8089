//! Terminal studio for Aura AI: dashboard, tool workspaces and the key settings panel.

pub mod app;
pub mod components;
pub mod handlers;
pub mod markdown;
pub mod state;
pub mod utils;

use std::sync::Arc;

use anyhow::Result;
use aura_core::{Config, Dispatcher, EventBus, Session};
use tracing::info;

// Re-export main types for convenience
pub use app::App;

/// Build the dispatcher from `config` and run the studio until the user quits
pub async fn run_studio(config: Config) -> Result<()> {
    let event_bus = EventBus::new();
    let dispatcher = Dispatcher::from_config(&config)?.with_event_sender(event_bus.sender());
    let session = Session::new().with_credential(config.credential.clone());

    info!("Starting Aura AI Studio");
    let mut app = App::new(session, Arc::new(dispatcher), event_bus.into_receiver());
    app.run().await?;
    info!("Aura AI Studio shutting down");
    Ok(())
}
