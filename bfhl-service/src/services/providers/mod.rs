//! AI provider abstractions and implementations.
//!
//! The `AI` operation talks to a `TextProvider`; production wires in Gemini,
//! tests use the mock.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Instruction appended to every question so the model answers in one word.
pub const SINGLE_WORD_INSTRUCTION: &str = "Provide only a single-word answer, nothing else.";

/// Returned when the model produced no text at all.
pub const FALLBACK_ANSWER: &str = "Unknown";

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a provider response.
#[derive(Debug, Clone, Default)]
pub struct ProviderResponse {
    /// Text of the first candidate, if any.
    pub text: Option<String>,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a text response for a single-turn prompt.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Cheap readiness check; does not call the remote API.
    async fn health_check(&self) -> Result<(), ProviderError>;

    /// Model identifier, used for logs and metrics labels.
    fn model(&self) -> &str;
}

/// Build the prompt sent for a user question.
pub fn single_word_prompt(question: &str) -> String {
    format!("{}\n\n{}", question, SINGLE_WORD_INSTRUCTION)
}

/// Reduce a model reply to its first word with punctuation stripped.
pub fn single_word(text: &str) -> String {
    text.split_whitespace()
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '!' | '?' | ';' | ':'))
        .collect()
}

/// Ask the provider a question and return its one-word answer.
pub async fn ask_single_word(
    provider: &dyn TextProvider,
    question: &str,
) -> Result<String, ProviderError> {
    let response = provider.generate(&single_word_prompt(question)).await?;

    tracing::debug!(
        model = %provider.model(),
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Provider answered"
    );

    let text = response
        .text
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| FALLBACK_ANSWER.to_string());

    Ok(single_word(&text))
}

#[cfg(test)]
mod tests {
    use super::mock::MockTextProvider;
    use super::*;

    #[test]
    fn single_word_takes_first_token() {
        assert_eq!(single_word("  Paris is the capital."), "Paris");
        assert_eq!(single_word("Mumbai.\n"), "Mumbai");
        assert_eq!(single_word("Yes!"), "Yes");
        assert_eq!(single_word("e.g.,"), "eg");
        assert_eq!(single_word("   "), "");
    }

    #[test]
    fn prompt_appends_instruction() {
        assert_eq!(
            single_word_prompt("Capital of France?"),
            "Capital of France?\n\nProvide only a single-word answer, nothing else."
        );
    }

    #[tokio::test]
    async fn ask_single_word_trims_reply() {
        let provider = MockTextProvider::replying("Delhi is the answer.");
        let answer = ask_single_word(&provider, "Capital of India?").await.unwrap();
        assert_eq!(answer, "Delhi");
        assert_eq!(
            provider.last_prompt().as_deref(),
            Some("Capital of India?\n\nProvide only a single-word answer, nothing else.")
        );
    }

    #[tokio::test]
    async fn ask_single_word_falls_back_when_empty() {
        let provider = MockTextProvider::empty();
        let answer = ask_single_word(&provider, "Anything?").await.unwrap();
        assert_eq!(answer, FALLBACK_ANSWER);
    }

    #[tokio::test]
    async fn ask_single_word_propagates_errors() {
        let provider = MockTextProvider::failing();
        assert!(ask_single_word(&provider, "Anything?").await.is_err());
    }
}
