use aura_core::{AppEvent, ResultKind};
use tracing::debug;

use crate::state::{AppState, ShownResult};

/// Handles application events coming back from the dispatcher
pub struct EventHandler;

impl EventHandler {
    /// Handle application events
    pub async fn handle_event(state: &mut AppState, event: AppEvent) {
        match event {
            AppEvent::InvocationBegin { id, tool } => {
                debug!("Invocation {} started: {}", id, tool);
            }
            AppEvent::ToolCompleted { id, tool, result } => {
                debug!("Invocation {} completed: {:?}", id, result.kind);
                state.processing = false;
                // The user may have navigated away while the call was running
                if state.session.navigator().tool() == Some(tool) {
                    if result.kind == ResultKind::ImageUrl {
                        state.notice = Some(format!("Image: {}", result.payload));
                    }
                    state.last_result = Some(ShownResult { tool, result });
                    state.result_scroll = 0;
                }
            }
            AppEvent::InvocationEnd { id, tool, ok, duration_ms } => {
                debug!("Invocation {} ({}) ended: ok={}, duration={}ms", id, tool, ok, duration_ms);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::test_state;
    use aura_core::{Page, ToolName, ToolResult};

    fn completed(tool: ToolName, result: ToolResult) -> AppEvent {
        AppEvent::ToolCompleted { id: "test".to_string(), tool, result }
    }

    #[tokio::test]
    async fn test_completed_result_is_shown() {
        let mut state = test_state();
        state.navigate(ToolName::Summarizer);
        state.processing = true;

        EventHandler::handle_event(&mut state, completed(ToolName::Summarizer, ToolResult::text("short"))).await;

        assert!(!state.processing);
        let shown = state.last_result.expect("result should be shown");
        assert_eq!(shown.tool, ToolName::Summarizer);
        assert_eq!(shown.result.payload, "short");
    }

    #[tokio::test]
    async fn test_result_for_other_page_is_dropped() {
        let mut state = test_state();
        state.navigate(ToolName::Grammar);
        state.processing = true;
        state.navigate(Page::Dashboard);

        EventHandler::handle_event(&mut state, completed(ToolName::Grammar, ToolResult::warning("late"))).await;

        assert!(!state.processing);
        assert!(state.last_result.is_none());
    }

    #[tokio::test]
    async fn test_warning_result_kept_as_warning() {
        let mut state = test_state();
        state.navigate(ToolName::AiChat);

        EventHandler::handle_event(&mut state, completed(ToolName::AiChat, ToolResult::warning("busy"))).await;

        assert_eq!(state.last_result.map(|r| r.result.kind), Some(ResultKind::Warning));
    }

    #[tokio::test]
    async fn test_image_url_copied_to_notice() {
        let mut state = test_state();
        state.navigate(ToolName::ImageGen);
        let url = "https://image.pollinations.ai/prompt/a%20red%20fox%20in%20snow";

        EventHandler::handle_event(&mut state, completed(ToolName::ImageGen, ToolResult::image_url(url))).await;

        assert_eq!(state.notice.as_deref(), Some(format!("Image: {}", url).as_str()));
    }
}
