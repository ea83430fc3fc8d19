//! Mock provider implementation for testing.

use super::{ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

enum Behavior {
    Reply(String),
    Empty,
    Fail,
}

/// Mock text provider with a canned behaviour that records the last prompt.
pub struct MockTextProvider {
    behavior: Behavior,
    last_prompt: Mutex<Option<String>>,
}

impl MockTextProvider {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            last_prompt: Mutex::new(None),
        }
    }

    /// Always answers with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Reply(reply.into()))
    }

    /// Answers without any candidate text.
    pub fn empty() -> Self {
        Self::with_behavior(Behavior::Empty)
    }

    /// Fails every request like an unreachable upstream.
    pub fn failing() -> Self {
        Self::with_behavior(Behavior::Fail)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }

        match &self.behavior {
            Behavior::Reply(text) => Ok(ProviderResponse {
                text: Some(text.clone()),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: 1,
            }),
            Behavior::Empty => Ok(ProviderResponse::default()),
            Behavior::Fail => Err(ProviderError::NetworkError(
                "Mock provider unavailable".to_string(),
            )),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match self.behavior {
            Behavior::Fail => Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
