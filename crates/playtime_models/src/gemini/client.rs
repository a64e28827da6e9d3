//! Gemini REST client.

use crate::gemini::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use playtime_core::{RawCompletion, ResponseMode};
use playtime_error::{ConfigError, PlaytimeResult, TransportError, TransportErrorKind};
use playtime_interface::CompletionDriver;
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// REST base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Overall request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Gemini `generateContent` endpoint.
///
/// One [`complete`](CompletionDriver::complete) call is one HTTP request. The
/// client never retries.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiClient {
    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the key is blank or the HTTP client
    /// cannot be initialized.
    #[instrument(skip_all)]
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> PlaytimeResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::new(format!("{} is empty", API_KEY_ENV)).into());
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        let model = model.into();
        debug!(model = %model, base_url = %base_url, ?timeout, "Created Gemini client");

        Ok(Self {
            client,
            api_key,
            model,
            base_url,
        })
    }

    /// Creates a client reading the API key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the variable is unset or blank.
    #[instrument(skip_all)]
    pub fn from_env(
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> PlaytimeResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|e| ConfigError::new(format!("{} not set: {}", API_KEY_ENV, e)))?;
        Self::new(api_key, model, base_url, timeout)
    }

    /// Endpoint URL without the key query parameter.
    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

/// Map a reqwest failure, stripping the URL so the key never reaches logs.
fn request_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::new(TransportErrorKind::Timeout)
    } else {
        TransportError::new(TransportErrorKind::Request(e.without_url().to_string()))
    }
}

#[async_trait]
impl CompletionDriver for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str, mode: ResponseMode) -> PlaytimeResult<RawCompletion> {
        let body = GenerateContentRequest::new(prompt, mode);
        let url = self.endpoint();
        debug!(url = %url, json_output = mode.wants_json_output(), "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        let text = response.text().await.map_err(request_error)?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Gemini returned an error status");
            return Err(TransportError::new(TransportErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: text,
            })
            .into());
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&text).map_err(|e| {
            warn!(error = %e, "Gemini response did not decode");
            TransportError::new(TransportErrorKind::Decode(e.to_string()))
        })?;

        let raw = envelope.into_raw_completion();
        debug!(empty = matches!(raw, RawCompletion::Empty), "Received Gemini response");
        Ok(raw)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_is_config_error() {
        let err = GeminiClient::new("  ", DEFAULT_MODEL, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            playtime_error::PlaytimeErrorKind::Config(_)
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let client =
            GeminiClient::new("secret-key", DEFAULT_MODEL, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
                .unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("gemini-2.0-flash"));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new("k", "m", "http://localhost:9/v1beta/", DEFAULT_TIMEOUT)
            .unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9/v1beta/models/m:generateContent"
        );
    }
}
