//! Layered service configuration.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from playtime.toml)
//! - `~/.config/playtime/playtime.toml`
//! - `./playtime.toml`
//! - `PLAYTIME_`-prefixed environment variables, `__` between sections
//!   (`PLAYTIME_PIPELINE__RESPONSE_MODE=plain_text`)
//!
//! The API key is deliberately not part of this structure; it comes from
//! `GEMINI_API_KEY`.

use config::{Config, Environment, File, FileFormat};
use playtime_core::ResponseMode;
use playtime_error::{ConfigError, PlaytimeResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../playtime.toml");

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,
    /// Value for `Access-Control-Allow-Origin`; `*` allows any origin
    pub allowed_origin: String,
}

/// Completion model settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier, e.g. "gemini-2.0-flash"
    pub name: String,
    /// REST base URL
    pub base_url: String,
    /// Overall request timeout in seconds
    pub timeout_secs: u64,
}

impl ModelConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Lookup pipeline settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Prompt and extraction grammar
    pub response_mode: ResponseMode,
}

/// Top-level Playtime configuration.
///
/// # Example
///
/// ```no_run
/// use playtime_server::PlaytimeConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PlaytimeConfig::load()?;
/// println!("Listening on {}", config.server.bind);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaytimeConfig {
    /// `[server]` section
    pub server: ServerConfig,
    /// `[model]` section
    pub model: ModelConfig,
    /// `[pipeline]` section
    pub pipeline: PipelineConfig,
}

impl PlaytimeConfig {
    /// Load configuration from the standard locations.
    ///
    /// Missing user files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file or variable fails to parse.
    #[instrument]
    pub fn load() -> PlaytimeResult<Self> {
        let mut overrides = Vec::new();
        if let Some(home) = dirs::home_dir() {
            overrides.push(home.join(".config/playtime/playtime.toml"));
        }
        overrides.push(PathBuf::from("playtime.toml"));
        Self::load_with_overrides(&overrides)
    }

    /// Load bundled defaults, then each of `paths` in order, then the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file or variable fails to parse.
    #[instrument(skip(paths))]
    pub fn load_with_overrides(paths: &[impl AsRef<Path>]) -> PlaytimeResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        for path in paths {
            debug!(path = %path.as_ref().display(), "Adding optional config file");
            builder = builder.add_source(File::from(path.as_ref()).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("PLAYTIME")
                .prefix_separator("_")
                .separator("__"),
        );

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        debug!(
            bind = %config.server.bind,
            model = %config.model.name,
            mode = %config.pipeline.response_mode,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled file is malformed.
    pub fn defaults() -> PlaytimeResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults() {
        let config = PlaytimeConfig::defaults().unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.server.allowed_origin, "*");
        assert_eq!(config.model.name, "gemini-2.0-flash");
        assert_eq!(config.model.timeout(), Duration::from_secs(30));
        assert_eq!(config.pipeline.response_mode, ResponseMode::Json);
    }
}
