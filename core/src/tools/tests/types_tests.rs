use crate::error::DispatchError;
use crate::tools::types::*;

#[test]
fn test_display_names() {
    let names: Vec<&str> = ToolName::ALL.iter().map(|t| t.display_name()).collect();
    assert_eq!(
        names,
        vec![
            "AI Detector",
            "AI Chat",
            "Humanizer",
            "Image Gen",
            "Plagiarism",
            "Translator",
            "Paraphraser",
            "Summarizer",
            "Grammar",
            "Citations",
        ]
    );
    assert_eq!(ToolName::ImageGen.to_string(), "Image Gen");
}

#[test]
fn test_parse_tool_names() {
    assert_eq!("Grammar".parse::<ToolName>().unwrap(), ToolName::Grammar);
    assert_eq!("image gen".parse::<ToolName>().unwrap(), ToolName::ImageGen);
    assert_eq!("image-gen".parse::<ToolName>().unwrap(), ToolName::ImageGen);
    assert_eq!("AI_DETECTOR".parse::<ToolName>().unwrap(), ToolName::AiDetector);

    for tool in ToolName::ALL {
        assert_eq!(tool.display_name().parse::<ToolName>().unwrap(), tool);
    }
}

#[test]
fn test_parse_unknown_tool() {
    match "Spellcheck".parse::<ToolName>() {
        Err(DispatchError::UnknownTool(name)) => assert_eq!(name, "Spellcheck"),
        other => panic!("Expected UnknownTool, got {:?}", other),
    }
}

#[test]
fn test_result_constructors() {
    let text = ToolResult::text("done");
    assert_eq!(text.kind, ResultKind::Text);
    assert!(text.is_success());
    assert!(text.caption().is_none());

    let image = ToolResult::image_url("https://example.test/prompt/x");
    assert_eq!(image.kind, ResultKind::ImageUrl);
    assert_eq!(image.caption(), Some(IMAGE_CAPTION));

    assert!(!ToolResult::warning("w").is_success());
    assert!(!ToolResult::error("e").is_success());
}

#[test]
fn test_result_serialization() {
    let result = ToolResult::warning("Please provide input text.");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["kind"], "Warning");
    assert_eq!(value["payload"], "Please provide input text.");
}
