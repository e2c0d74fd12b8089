pub mod types;
pub mod dispatcher;
pub mod registry;

#[cfg(test)]
pub mod tests;

pub use types::*;
pub use dispatcher::{Dispatcher, Invocation};
pub use registry::ToolRegistry;
