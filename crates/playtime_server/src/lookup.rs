//! The lookup pipeline: validate, prompt, complete, normalize.

use playtime_core::{DurationValue, LookupRequest, LookupResult, ResponseMode};
use playtime_error::PlaytimeResult;
use playtime_grammar::{build, normalize};
use playtime_interface::CompletionDriver;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Runs one lookup per call against a shared completion driver.
///
/// Holds no per-request state; clone freely.
#[derive(Clone)]
pub struct LookupService {
    driver: Arc<dyn CompletionDriver>,
    mode: ResponseMode,
}

impl std::fmt::Debug for LookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupService")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .field("mode", &self.mode)
            .finish()
    }
}

impl LookupService {
    /// Create a service that asks `driver` in `mode`.
    pub fn new(driver: Arc<dyn CompletionDriver>, mode: ResponseMode) -> Self {
        Self { driver, mode }
    }

    /// Response mode used for every lookup.
    pub fn mode(&self) -> ResponseMode {
        self.mode
    }

    /// Look up the `Main + Extras` time for `game_title`.
    ///
    /// Unavailable times are a successful result whose `time` reads
    /// `N/A (...)`.
    ///
    /// # Errors
    ///
    /// - Input error if the title is empty after trimming; the driver is not
    ///   called.
    /// - Configuration or transport errors from the driver.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub async fn lookup(&self, game_title: &str) -> PlaytimeResult<LookupResult> {
        let value = self.lookup_duration(game_title).await?;
        Ok(LookupResult::from(value))
    }

    /// Like [`lookup`](Self::lookup) but returns the structured duration.
    ///
    /// # Errors
    ///
    /// Same as [`lookup`](Self::lookup).
    pub async fn lookup_duration(&self, game_title: &str) -> PlaytimeResult<DurationValue> {
        let request = LookupRequest::new(game_title)?;
        info!(game_title = %request.game_title(), "Lookup received");

        let prompt = build(request.game_title(), self.mode);
        debug!(prompt = %prompt, "Prompt");

        let raw = self
            .driver
            .complete(&prompt, self.mode)
            .await
            .inspect_err(|e| error!(error = %e, "Completion call failed"))?;
        debug!(raw = ?raw, "Raw completion");

        let value = normalize(&raw, self.mode);
        if value.is_known() {
            info!(time = %value, "Lookup complete");
        } else {
            warn!(time = %value, "Lookup complete without a usable time");
        }
        Ok(value)
    }
}
