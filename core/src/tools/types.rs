use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DispatchError;

/// Available tools
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToolName {
    AiDetector,
    AiChat,
    Humanizer,
    ImageGen,
    Plagiarism,
    Translator,
    Paraphraser,
    Summarizer,
    Grammar,
    Citations,
}

impl ToolName {
    /// Every tool, in dashboard order
    pub const ALL: [ToolName; 10] = [
        ToolName::AiDetector,
        ToolName::AiChat,
        ToolName::Humanizer,
        ToolName::ImageGen,
        ToolName::Plagiarism,
        ToolName::Translator,
        ToolName::Paraphraser,
        ToolName::Summarizer,
        ToolName::Grammar,
        ToolName::Citations,
    ];

    /// Name shown on the dashboard and accepted on the command line
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolName::AiDetector => "AI Detector",
            ToolName::AiChat => "AI Chat",
            ToolName::Humanizer => "Humanizer",
            ToolName::ImageGen => "Image Gen",
            ToolName::Plagiarism => "Plagiarism",
            ToolName::Translator => "Translator",
            ToolName::Paraphraser => "Paraphraser",
            ToolName::Summarizer => "Summarizer",
            ToolName::Grammar => "Grammar",
            ToolName::Citations => "Citations",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ToolName {
    type Err = DispatchError;

    /// Accepts the display name in any case, with spaces, dashes or
    /// underscores ("Image Gen", "image-gen", "IMAGE_GEN").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ToolName::ALL
            .into_iter()
            .find(|tool| normalize(tool.display_name()) == wanted)
            .ok_or_else(|| DispatchError::UnknownTool(s.to_string()))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Which hosted model family a text tool runs on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ModelTier {
    Fast,
    Capable,
}

/// What a tool produces
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutputKind {
    Text,
    Image,
}

/// Static description of one tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: ToolName,
    pub icon: &'static str,
    pub description: &'static str,
    pub model_tier: ModelTier,
    pub system_instruction: &'static str,
    pub output_kind: OutputKind,
}

/// Caption rendered under every generated image
pub const IMAGE_CAPTION: &str = "Generated by Aura AI (Pollinations Engine)";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResultKind {
    Text,
    ImageUrl,
    Warning,
    Error,
}

/// Displayable outcome of one dispatch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolResult {
    pub kind: ResultKind,
    pub payload: String,
}

impl ToolResult {
    pub fn text(payload: impl Into<String>) -> Self {
        Self { kind: ResultKind::Text, payload: payload.into() }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        Self { kind: ResultKind::ImageUrl, payload: url.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { kind: ResultKind::Warning, payload: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ResultKind::Error, payload: message.into() }
    }

    /// Caption for image results, none for everything else
    pub fn caption(&self) -> Option<&'static str> {
        match self.kind {
            ResultKind::ImageUrl => Some(IMAGE_CAPTION),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.kind, ResultKind::Text | ResultKind::ImageUrl)
    }
}
