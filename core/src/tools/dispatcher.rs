use crate::adapters::{GeminiAdapter, ImageAdapter, TextAdapter};
use crate::config::{Config, ModelMap};
use crate::error::{ConfigError, DispatchError};
use crate::events::{AppEvent, EventSender};
use crate::session::Credential;
use crate::tools::registry::ToolRegistry;
use crate::tools::types::{OutputKind, ToolDefinition, ToolName, ToolResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// One text-tool request, built per dispatch and dropped afterwards
#[derive(Debug, Clone)]
pub struct Invocation<'a> {
    pub id: String,
    pub tool: &'a ToolDefinition,
    pub model: &'a str,
    pub input_text: &'a str,
    pub credential: &'a Credential,
}

/// Routes a tool request to the text or image adapter and turns the
/// outcome into something displayable
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
    text: Arc<dyn TextAdapter>,
    image: ImageAdapter,
    models: ModelMap,
    event_sender: Option<EventSender>,
}

impl Dispatcher {
    pub fn new(text: Arc<dyn TextAdapter>, image: ImageAdapter) -> Self {
        Self {
            registry: Arc::new(ToolRegistry::new()),
            text,
            image,
            models: ModelMap::default(),
            event_sender: None,
        }
    }

    /// Gemini for text, the configured image endpoint for images
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let text = GeminiAdapter::from_config(config)?;
        Ok(Self::new(Arc::new(text), ImageAdapter::from_config(config))
            .with_models(config.models.clone()))
    }

    pub fn with_models(mut self, models: ModelMap) -> Self {
        self.models = models;
        self
    }

    pub fn with_event_sender(mut self, event_sender: EventSender) -> Self {
        self.event_sender = Some(event_sender);
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn models(&self) -> &ModelMap {
        &self.models
    }

    pub fn image_adapter(&self) -> &ImageAdapter {
        &self.image
    }

    pub fn text_adapter_info(&self) -> crate::adapters::AdapterInfo {
        self.text.info()
    }

    /// Run a tool and always come back with something to display
    pub async fn run(&self, tool: ToolName, input_text: &str, credential: Option<&Credential>) -> ToolResult {
        let id = Uuid::new_v4().to_string();
        self.emit(AppEvent::InvocationBegin { id: id.clone(), tool });
        let start = Instant::now();

        let result = match self.try_run(&id, tool, input_text, credential).await {
            Ok(result) => result,
            Err(err) => Self::translate(tool, err),
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        self.emit(AppEvent::ToolCompleted { id: id.clone(), tool, result: result.clone() });
        self.emit(AppEvent::InvocationEnd { id, tool, ok: result.is_success(), duration_ms });

        result
    }

    /// Run a tool, reporting failures as [`DispatchError`]
    pub async fn try_run(
        &self,
        id: &str,
        tool: ToolName,
        input_text: &str,
        credential: Option<&Credential>,
    ) -> Result<ToolResult, DispatchError> {
        if input_text.trim().is_empty() {
            return Err(DispatchError::EmptyInput);
        }

        // Every ToolName is registered at construction, so this only fires
        // if the registry was built wrong.
        let definition = self
            .registry
            .get(&tool)
            .ok_or_else(|| DispatchError::UnknownTool(tool.to_string()))?;

        match definition.output_kind {
            OutputKind::Image => {
                let url = self.image.image_url_for(input_text);
                info!(invocation = id, tool = %tool, "built image url");
                Ok(ToolResult::image_url(url))
            }
            OutputKind::Text => {
                let credential = credential
                    .filter(|c| !c.is_empty())
                    .ok_or(DispatchError::MissingCredential)?;

                let invocation = Invocation {
                    id: id.to_string(),
                    tool: definition,
                    model: self.models.model_for(definition.model_tier),
                    input_text,
                    credential,
                };
                self.call_text_adapter(&invocation).await
            }
        }
    }

    async fn call_text_adapter(&self, invocation: &Invocation<'_>) -> Result<ToolResult, DispatchError> {
        info!(
            invocation = %invocation.id,
            tool = %invocation.tool.name,
            model = invocation.model,
            input_len = invocation.input_text.len(),
            "calling text adapter"
        );

        let text = self
            .text
            .generate(
                invocation.model,
                invocation.tool.system_instruction,
                invocation.input_text,
                invocation.credential,
            )
            .await?;

        debug!(invocation = %invocation.id, output_len = text.len(), "text adapter returned");
        Ok(ToolResult::text(text))
    }

    /// Total mapping from a failure to what the user sees
    fn translate(tool: ToolName, err: DispatchError) -> ToolResult {
        match err {
            DispatchError::EmptyInput | DispatchError::MissingCredential | DispatchError::RateLimited => {
                warn!(tool = %tool, "dispatch declined: {}", err);
                ToolResult::warning(err.user_message())
            }
            DispatchError::Remote(_) => {
                warn!(tool = %tool, "remote failure: {}", err);
                ToolResult::error(err.user_message())
            }
            DispatchError::UnknownTool(_) => {
                error!(tool = %tool, "tool missing from registry");
                ToolResult::error(err.user_message())
            }
        }
    }

    fn emit(&self, event: AppEvent) {
        if let Some(sender) = &self.event_sender {
            let _ = sender.send(event);
        }
    }
}
