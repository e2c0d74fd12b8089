//! Text adapter for Google's Generative Language API (`generateContent`).
//!
//! Failures are classified from the structured error payload the API
//! returns (`{"error": {"code", "status", "message", "details"}}`) together
//! with the HTTP status, never by searching the message text.

use crate::adapters::{AdapterInfo, TextAdapter};
use crate::config::Config;
use crate::error::{AdapterError, ConfigError};
use crate::session::Credential;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub struct GeminiAdapter {
    info: AdapterInfo,
    client: reqwest::Client,
    base_url: String,
}

impl GeminiAdapter {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            info: AdapterInfo {
                name: "Gemini".to_string(),
                description: "Google Generative Language API".to_string(),
                version: "v1beta".to_string(),
            },
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(config.gemini_base_url.clone(), config.request_timeout)
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    async fn http_post(&self, model: &str, body: &Value, credential: &Credential) -> Result<GenerateResponse, AdapterError> {
        let resp = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", credential.expose())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| AdapterError::Remote(format!("request error: {}", e)))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let text = resp.text().await.unwrap_or_default();
            return Err(classify_error(status, &text));
        }

        resp.json()
            .await
            .map_err(|e| AdapterError::Remote(format!("decode error: {}", e)))
    }
}

#[async_trait]
impl TextAdapter for GeminiAdapter {
    async fn generate(
        &self,
        model: &str,
        system_instruction: &str,
        prompt: &str,
        credential: &Credential,
    ) -> Result<String, AdapterError> {
        if credential.is_empty() {
            return Err(AdapterError::Auth("no API key supplied".to_string()));
        }

        let start = Instant::now();
        let body = request_body(system_instruction, prompt);
        debug!(model, prompt_len = prompt.len(), "sending generateContent request");

        let resp = self.http_post(model, &body, credential).await?;
        let text = resp.into_text()?;

        debug!(model, elapsed_ms = start.elapsed().as_millis() as u64, "generateContent finished");
        Ok(text)
    }

    fn info(&self) -> AdapterInfo {
        self.info.clone()
    }
}

/// JSON body for `generateContent`
pub(crate) fn request_body(system_instruction: &str, prompt: &str) -> Value {
    let mut body = json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }]
    });
    if !system_instruction.is_empty() {
        body["system_instruction"] = json!({
            "parts": [{ "text": system_instruction }]
        });
    }
    body
}

/// Map a non-success HTTP response onto the adapter error taxonomy
pub(crate) fn classify_error(status: u16, body: &str) -> AdapterError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error);

    let api_status = parsed.as_ref().and_then(|e| e.status.clone()).unwrap_or_default();
    let reasons: Vec<&str> = parsed
        .as_ref()
        .map(|e| e.details.iter().filter_map(|d| d.reason.as_deref()).collect())
        .unwrap_or_default();
    let detail = match parsed.as_ref().and_then(|e| e.message.clone()) {
        Some(message) if !message.is_empty() => format!("{}: {}", status, message),
        _ if body.trim().is_empty() => format!("HTTP {}", status),
        _ => format!("{}: {}", status, body.trim()),
    };

    if status == 429 || api_status == "RESOURCE_EXHAUSTED" {
        warn!(status, "text service is throttling requests");
        return AdapterError::RateLimited(detail);
    }

    if status == 401
        || status == 403
        || api_status == "UNAUTHENTICATED"
        || api_status == "PERMISSION_DENIED"
        || reasons.iter().any(|r| *r == "API_KEY_INVALID")
    {
        return AdapterError::Auth(detail);
    }

    AdapterError::Remote(detail)
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    details: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate
    pub(crate) fn into_text(self) -> Result<String, AdapterError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(AdapterError::Remote(format!("prompt blocked: {}", reason)));
        }

        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(AdapterError::Remote("no candidates returned".to_string()));
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
            return Err(AdapterError::Remote(format!("empty response (finish reason: {})", reason)));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_carries_instruction_and_prompt() {
        let body = request_body("You are a strict proofreader.", "teh cat");
        assert_eq!(body["system_instruction"]["parts"][0]["text"], "You are a strict proofreader.");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "teh cat");
    }

    #[test]
    fn test_request_body_without_instruction() {
        let body = request_body("", "hello");
        assert!(body.get("system_instruction").is_none());
    }

    #[test]
    fn test_classify_rate_limit_by_status() {
        let body = r#"{"error":{"code":429,"message":"Resource has been exhausted (e.g. check quota).","status":"RESOURCE_EXHAUSTED"}}"#;
        assert!(matches!(classify_error(429, body), AdapterError::RateLimited(_)));
    }

    #[test]
    fn test_classify_rate_limit_by_api_status() {
        let body = r#"{"error":{"code":503,"message":"quota","status":"RESOURCE_EXHAUSTED"}}"#;
        assert!(matches!(classify_error(503, body), AdapterError::RateLimited(_)));
    }

    #[test]
    fn test_message_mentioning_429_is_not_rate_limit() {
        let body = r#"{"error":{"code":500,"message":"upstream said 429 once","status":"INTERNAL"}}"#;
        assert!(matches!(classify_error(500, body), AdapterError::Remote(_)));
    }

    #[test]
    fn test_classify_invalid_key() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT","details":[{"@type":"type.googleapis.com/google.rpc.ErrorInfo","reason":"API_KEY_INVALID","domain":"googleapis.com"}]}}"#;
        assert!(matches!(classify_error(400, body), AdapterError::Auth(_)));
        assert!(matches!(classify_error(403, "{}"), AdapterError::Auth(_)));
    }

    #[test]
    fn test_classify_other_error_keeps_detail() {
        let body = r#"{"error":{"code":404,"message":"models/gemini-9 is not found","status":"NOT_FOUND"}}"#;
        match classify_error(404, body) {
            AdapterError::Remote(detail) => assert!(detail.contains("models/gemini-9 is not found")),
            other => panic!("Expected remote error, got {:?}", other),
        }

        match classify_error(502, "Bad Gateway") {
            AdapterError::Remote(detail) => assert_eq!(detail, "502: Bad Gateway"),
            other => panic!("Expected remote error, got {:?}", other),
        }
    }

    #[test]
    fn test_response_text_joins_parts() {
        let json = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"This is a test "},{"text":"sentence with error."}]},"finishReason":"STOP"}]}"#;
        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.into_text().unwrap(), "This is a test sentence with error.");
    }

    #[test]
    fn test_blocked_prompt_is_remote_error() {
        let json = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        match resp.into_text() {
            Err(AdapterError::Remote(detail)) => assert!(detail.contains("SAFETY")),
            other => panic!("Expected remote error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_credential_fails_before_request() {
        // Unroutable base URL: any request attempt would surface as Remote
        let adapter = GeminiAdapter::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        let result = adapter
            .generate("gemini-1.5-flash", "sys", "hi", &Credential::new(""))
            .await;
        assert!(matches!(result, Err(AdapterError::Auth(_))));
    }
}
