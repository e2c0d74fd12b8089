use crate::tools::{ToolName, ToolResult};
use tokio::sync::mpsc;

/// Events that flow through the application
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A dispatch started
    InvocationBegin { id: String, tool: ToolName },

    /// A dispatch finished; `ok` is false for warnings and errors
    InvocationEnd { id: String, tool: ToolName, ok: bool, duration_ms: u64 },

    /// Result ready to render
    ToolCompleted { id: String, tool: ToolName, result: ToolResult },
}

/// Event bus for communication between components
#[derive(Debug)]
pub struct EventBus {
    sender: mpsc::UnboundedSender<AppEvent>,
    receiver: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Get a sender handle for the event bus
    pub fn sender(&self) -> EventSender {
        EventSender {
            inner: self.sender.clone(),
        }
    }

    /// Get the receiver (should only be used by the main event loop)
    pub fn into_receiver(self) -> mpsc::UnboundedReceiver<AppEvent> {
        self.receiver
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for sending events to the event bus
#[derive(Debug, Clone)]
pub struct EventSender {
    inner: mpsc::UnboundedSender<AppEvent>,
}

impl EventSender {
    /// Send an event to the bus
    pub fn send(&self, event: AppEvent) -> Result<(), EventSendError> {
        self.inner
            .send(event)
            .map_err(|_| EventSendError::ChannelClosed)
    }

    /// Send a finished result
    pub fn send_completed(&self, id: String, tool: ToolName, result: ToolResult) -> Result<(), EventSendError> {
        self.send(AppEvent::ToolCompleted { id, tool, result })
    }
}

/// Errors that can occur when sending events
#[derive(Debug, thiserror::Error)]
pub enum EventSendError {
    #[error("Event channel is closed")]
    ChannelClosed,
}
