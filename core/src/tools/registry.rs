use crate::tools::types::{ModelTier, OutputKind, ToolDefinition, ToolName};
use std::collections::HashMap;

/// Registry of the studio's tools and their prompt templates
pub struct ToolRegistry {
    definitions: HashMap<ToolName, ToolDefinition>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            definitions: HashMap::new(),
        };

        registry.register_builtin_tools();
        registry
    }

    /// Register all built-in tools
    fn register_builtin_tools(&mut self) {
        for tool in ToolName::ALL {
            self.definitions.insert(tool, builtin_definition(tool));
        }
    }

    /// All definitions in dashboard order
    pub fn get_all(&self) -> Vec<&ToolDefinition> {
        ToolName::ALL
            .iter()
            .filter_map(|tool| self.definitions.get(tool))
            .collect()
    }

    /// Definition for a specific tool
    pub fn get(&self, tool: &ToolName) -> Option<&ToolDefinition> {
        self.definitions.get(tool)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_definition(tool: ToolName) -> ToolDefinition {
    match tool {
        ToolName::Humanizer => ToolDefinition {
            name: tool,
            icon: "🧠",
            description: "Rewrite text so it reads as natural human writing",
            model_tier: ModelTier::Capable,
            system_instruction: "You are an expert copywriter. Rewrite the provided text to maximize burstiness and perplexity, making it completely indistinguishable from high-level human writing. Remove robotic transitions.",
            output_kind: OutputKind::Text,
        },
        ToolName::AiDetector => ToolDefinition {
            name: tool,
            icon: "🕵️",
            description: "Estimate how likely a text is AI-generated",
            model_tier: ModelTier::Capable,
            system_instruction: "You are a highly advanced AI detection system. Analyze the text and provide a probability percentage of it being AI-generated, followed by a breakdown of the specific syntactic markers that led to your conclusion.",
            output_kind: OutputKind::Text,
        },
        ToolName::AiChat => ToolDefinition {
            name: tool,
            icon: "💬",
            description: "General purpose assistant",
            model_tier: ModelTier::Capable,
            system_instruction: "You are Aura AI, a professional, high-end SaaS assistant. Be concise, brilliant, and helpful.",
            output_kind: OutputKind::Text,
        },
        ToolName::Summarizer => ToolDefinition {
            name: tool,
            icon: "✂️",
            description: "Bullet-point summary with a short overview",
            model_tier: ModelTier::Fast,
            system_instruction: "You are a professional editor. Summarize the text concisely, extracting only the most critical bullet points and a brief overview.",
            output_kind: OutputKind::Text,
        },
        ToolName::Grammar => ToolDefinition {
            name: tool,
            icon: "✅",
            description: "Fix grammar, spelling and punctuation",
            model_tier: ModelTier::Fast,
            system_instruction: "You are a strict proofreader. Fix all grammatical, spelling, and punctuation errors in the text. Output the corrected text only.",
            output_kind: OutputKind::Text,
        },
        // Direction is guessed by the model: foreign text goes to English,
        // English goes to three fixed languages.
        ToolName::Translator => ToolDefinition {
            name: tool,
            icon: "🌍",
            description: "Translate to English, or from English to Spanish, French and Japanese",
            model_tier: ModelTier::Fast,
            system_instruction: "You are a master linguist. If the text is not English, translate it to English. If it is English, translate it to Spanish, French, and Japanese in a clean format.",
            output_kind: OutputKind::Text,
        },
        ToolName::Citations => ToolDefinition {
            name: tool,
            icon: "📚",
            description: "APA, MLA and Chicago citations for a source",
            model_tier: ModelTier::Fast,
            system_instruction: "Generate perfect APA, MLA, and Chicago style citations based on the provided text, link, or source details.",
            output_kind: OutputKind::Text,
        },
        // No web search behind this one; the score is a statistical guess.
        ToolName::Plagiarism => ToolDefinition {
            name: tool,
            icon: "🔍",
            description: "Cliche and reuse analysis with a mock originality score",
            model_tier: ModelTier::Fast,
            system_instruction: "You are a plagiarism detection tool. While you cannot search the live web, analyze the text for highly common cliches, heavily reused academic phrasing, and provide a mock originality score based on statistical likelihood.",
            output_kind: OutputKind::Text,
        },
        ToolName::Paraphraser => ToolDefinition {
            name: tool,
            icon: "🔄",
            description: "Improve flow and clarity, same meaning",
            model_tier: ModelTier::Fast,
            system_instruction: "You are a master wordsmith. Paraphrase the text to improve flow and clarity while retaining the exact original meaning.",
            output_kind: OutputKind::Text,
        },
        ToolName::ImageGen => ToolDefinition {
            name: tool,
            icon: "🎨",
            description: "Generate an image from a prompt",
            model_tier: ModelTier::Fast,
            system_instruction: "",
            output_kind: OutputKind::Image,
        },
    }
}
