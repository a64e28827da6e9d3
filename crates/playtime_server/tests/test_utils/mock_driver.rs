//! Mock completion driver for testing.

use async_trait::async_trait;
use playtime_core::{RawCompletion, ResponseMode};
use playtime_error::{ConfigError, PlaytimeResult, TransportError, TransportErrorKind};
use playtime_interface::CompletionDriver;
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockBehavior {
    /// Always answer with the given text
    Success(String),
    /// Always answer with no candidate content
    Empty,
    /// Always fail with the given transport error
    TransportFailure(TransportErrorKind),
    /// Always fail as if no API key were configured
    MissingKey,
}

/// Mock driver recording every prompt it receives.
pub struct MockCompletionDriver {
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<(String, ResponseMode)>>>,
}

#[allow(dead_code)]
impl MockCompletionDriver {
    /// Create a mock with custom behavior.
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that always answers with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Success(text.into()))
    }

    /// Get the number of times complete() was called.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Prompt and mode of the most recent call.
    pub fn last_call(&self) -> Option<(String, ResponseMode)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionDriver for MockCompletionDriver {
    async fn complete(&self, prompt: &str, mode: ResponseMode) -> PlaytimeResult<RawCompletion> {
        self.calls.lock().unwrap().push((prompt.to_string(), mode));

        match &self.behavior {
            MockBehavior::Success(text) => Ok(RawCompletion::Text(text.clone())),
            MockBehavior::Empty => Ok(RawCompletion::Empty),
            MockBehavior::TransportFailure(kind) => Err(TransportError::new(kind.clone()).into()),
            MockBehavior::MissingKey => Err(ConfigError::new("GEMINI_API_KEY not set").into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
