//! Completion driver selection.

use crate::ModelConfig;
use async_trait::async_trait;
use playtime_core::{RawCompletion, ResponseMode};
use playtime_error::{ConfigError, PlaytimeResult};
use playtime_interface::CompletionDriver;
use playtime_models::GeminiClient;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Stand-in driver used when no API key is available.
///
/// Every call fails with a configuration error, so the server can start and
/// report the problem per request.
#[derive(Debug, Clone)]
pub struct MissingCredential {
    model: String,
    reason: String,
}

impl MissingCredential {
    /// A driver that reports `reason` on every call.
    pub fn new(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl CompletionDriver for MissingCredential {
    async fn complete(&self, _prompt: &str, _mode: ResponseMode) -> PlaytimeResult<RawCompletion> {
        Err(ConfigError::new(self.reason.clone()).into())
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Build the Gemini driver from `GEMINI_API_KEY`, falling back to
/// [`MissingCredential`] when the key is absent.
#[instrument(skip_all, fields(model = %config.name))]
pub fn driver_from_config(config: &ModelConfig) -> Arc<dyn CompletionDriver> {
    match GeminiClient::from_env(&config.name, &config.base_url, config.timeout()) {
        Ok(client) => {
            info!("Gemini client ready");
            Arc::new(client)
        }
        Err(e) => {
            warn!(error = %e, "Gemini client unavailable, lookups will fail");
            Arc::new(MissingCredential::new(&config.name, e.to_string()))
        }
    }
}
