pub mod registry_tests;
pub mod types_tests;

// Test utilities
use crate::adapters::{ImageAdapter, MockTextAdapter};
use crate::events::{AppEvent, EventBus, EventSender};
use crate::session::Credential;
use crate::tools::Dispatcher;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Test helper to build a dispatcher around a mock text adapter
pub fn setup_dispatcher(adapter: MockTextAdapter) -> (Dispatcher, Arc<MockTextAdapter>) {
    let adapter = Arc::new(adapter);
    let dispatcher = Dispatcher::new(adapter.clone(), ImageAdapter::default());
    (dispatcher, adapter)
}

/// Test helper to setup an event bus for testing
pub fn setup_event_bus() -> (EventSender, mpsc::UnboundedReceiver<AppEvent>) {
    let bus = EventBus::new();
    let sender = bus.sender();
    let receiver = bus.into_receiver();
    (sender, receiver)
}

/// Test helper to collect events from a receiver
pub async fn collect_events(receiver: &mut mpsc::UnboundedReceiver<AppEvent>, count: usize) -> Vec<AppEvent> {
    let mut events = Vec::new();
    for _ in 0..count {
        if let Some(event) = receiver.recv().await {
            events.push(event);
        }
    }
    events
}

pub fn valid_key() -> Credential {
    Credential::new("test-key-1234567890")
}
