//! Completion-service trait.

use async_trait::async_trait;
use playtime_core::{RawCompletion, ResponseMode};
use playtime_error::PlaytimeResult;

/// A text-completion backend.
///
/// Implementations make exactly one call per invocation: no batching, no
/// retries. Transport problems are returned as errors; a well-formed answer
/// without candidate content is [`RawCompletion::Empty`].
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Send `prompt` and return the model's raw output.
    ///
    /// `mode` lets the backend request native structured output when the
    /// prompt asks for JSON.
    async fn complete(&self, prompt: &str, mode: ResponseMode) -> PlaytimeResult<RawCompletion>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.0-flash").
    fn model_name(&self) -> &str;
}
