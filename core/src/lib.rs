pub mod adapters;
pub mod config;
pub mod error;
pub mod events;
pub mod session;
pub mod tools;

// Re-export main types for convenience
pub use adapters::{AdapterInfo, GeminiAdapter, ImageAdapter, MockTextAdapter, TextAdapter};
pub use config::{Config, ModelMap};
pub use error::{AdapterError, ConfigError, DispatchError, BUSY_NOTICE};
pub use events::{AppEvent, EventBus, EventSender};
pub use session::{Credential, Navigator, Page, Session};
pub use tools::{
    Dispatcher, Invocation, ModelTier, OutputKind, ResultKind, ToolDefinition, ToolName, ToolRegistry,
    ToolResult, IMAGE_CAPTION,
};
