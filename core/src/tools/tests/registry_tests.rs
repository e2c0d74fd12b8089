use crate::tools::{ModelTier, OutputKind, ToolName, ToolRegistry};

#[test]
fn test_every_tool_has_exactly_one_definition() {
    let registry = ToolRegistry::new();

    assert_eq!(registry.len(), ToolName::ALL.len());
    for tool in ToolName::ALL {
        let definition = registry.get(&tool).expect("tool missing from registry");
        assert_eq!(definition.name, tool);
    }
}

#[test]
fn test_get_all_keeps_dashboard_order() {
    let registry = ToolRegistry::new();
    let names: Vec<ToolName> = registry.get_all().iter().map(|d| d.name).collect();
    assert_eq!(names, ToolName::ALL.to_vec());
}

#[test]
fn test_text_tools_have_instructions() {
    let registry = ToolRegistry::new();

    for definition in registry.get_all() {
        match definition.output_kind {
            OutputKind::Text => assert!(
                !definition.system_instruction.is_empty(),
                "{} has no system instruction",
                definition.name
            ),
            OutputKind::Image => assert_eq!(definition.name, ToolName::ImageGen),
        }
        assert!(!definition.icon.is_empty());
        assert!(!definition.description.is_empty());
    }
}

#[test]
fn test_model_tiers() {
    let registry = ToolRegistry::new();

    for tool in [ToolName::Humanizer, ToolName::AiDetector, ToolName::AiChat] {
        assert_eq!(registry.get(&tool).unwrap().model_tier, ModelTier::Capable);
    }
    for tool in [
        ToolName::Summarizer,
        ToolName::Grammar,
        ToolName::Translator,
        ToolName::Citations,
        ToolName::Plagiarism,
        ToolName::Paraphraser,
    ] {
        assert_eq!(registry.get(&tool).unwrap().model_tier, ModelTier::Fast);
    }
}

#[test]
fn test_grammar_instruction() {
    let registry = ToolRegistry::new();
    let grammar = registry.get(&ToolName::Grammar).unwrap();
    assert!(grammar.system_instruction.starts_with("You are a strict proofreader."));
    assert!(grammar.system_instruction.contains("Output the corrected text only."));
}

#[test]
fn test_approximate_tools_say_so() {
    let registry = ToolRegistry::new();

    let plagiarism = registry.get(&ToolName::Plagiarism).unwrap();
    assert!(plagiarism.system_instruction.contains("cannot search the live web"));
    assert!(plagiarism.system_instruction.contains("mock originality score"));

    let translator = registry.get(&ToolName::Translator).unwrap();
    assert!(translator.system_instruction.contains("If the text is not English"));
}
