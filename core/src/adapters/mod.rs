use async_trait::async_trait;

use crate::error::AdapterError;
use crate::session::Credential;

pub mod gemini;
pub mod image;
pub mod mock;

pub use gemini::GeminiAdapter;
pub use image::ImageAdapter;
pub use mock::MockTextAdapter;

/// Boundary to a hosted text-generation service
#[async_trait]
pub trait TextAdapter: Send + Sync {
    /// Generate a completion for `prompt` under `system_instruction`
    async fn generate(
        &self,
        model: &str,
        system_instruction: &str,
        prompt: &str,
        credential: &Credential,
    ) -> Result<String, AdapterError>;

    /// Get adapter information
    fn info(&self) -> AdapterInfo;
}

/// Information about an adapter
#[derive(Debug, Clone)]
pub struct AdapterInfo {
    pub name: String,
    pub description: String,
    pub version: String,
}
