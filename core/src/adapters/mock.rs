use super::{AdapterInfo, TextAdapter};
use crate::error::AdapterError;
use crate::session::Credential;
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

/// One call seen by [`MockTextAdapter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub model: String,
    pub system_instruction: String,
    pub prompt: String,
}

/// Scripted text adapter that records every call
pub struct MockTextAdapter {
    info: AdapterInfo,
    delay: Duration,
    reply: Mutex<Reply>,
    calls: Mutex<Vec<RecordedCall>>,
}

enum Reply {
    Echo,
    Fixed(Result<String, AdapterError>),
}

impl MockTextAdapter {
    /// Echoes the prompt back
    pub fn new() -> Self {
        Self {
            info: AdapterInfo {
                name: "Mock Adapter".to_string(),
                description: "Scripted text adapter for tests".to_string(),
                version: "0.1.0".to_string(),
            },
            delay: Duration::ZERO,
            reply: Mutex::new(Reply::Echo),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.set_reply(Ok(text.into()));
        mock
    }

    pub fn failing(error: AdapterError) -> Self {
        let mock = Self::new();
        mock.set_reply(Err(error));
        mock
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn set_reply(&self, reply: Result<String, AdapterError>) {
        if let Ok(mut slot) = self.reply.lock() {
            *slot = Reply::Fixed(reply);
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl Default for MockTextAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextAdapter for MockTextAdapter {
    async fn generate(
        &self,
        model: &str,
        system_instruction: &str,
        prompt: &str,
        credential: &Credential,
    ) -> Result<String, AdapterError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                model: model.to_string(),
                system_instruction: system_instruction.to_string(),
                prompt: prompt.to_string(),
            });
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if credential.is_empty() {
            return Err(AdapterError::Auth("no API key supplied".to_string()));
        }

        let reply = self
            .reply
            .lock()
            .map_err(|_| AdapterError::Remote("mock poisoned".to_string()))?;
        match &*reply {
            Reply::Echo => Ok(prompt.to_string()),
            Reply::Fixed(result) => result.clone(),
        }
    }

    fn info(&self) -> AdapterInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_echo_records_call() {
        let adapter = MockTextAdapter::new().with_delay(Duration::from_millis(5));
        let out = adapter
            .generate("m", "sys", "Hello, world!", &Credential::new("k"))
            .await
            .unwrap();

        assert_eq!(out, "Hello, world!");
        assert_eq!(adapter.call_count(), 1);
        assert_eq!(adapter.calls()[0].system_instruction, "sys");
    }

    #[test]
    fn test_mock_scripted_error() {
        let adapter = MockTextAdapter::failing(AdapterError::Remote("boom".to_string()));
        let result = tokio_test::block_on(adapter.generate("m", "s", "p", &Credential::new("k")));
        assert_eq!(result, Err(AdapterError::Remote("boom".to_string())));
    }
}
