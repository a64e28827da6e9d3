//! Lookup request and result types.

use crate::DurationValue;
use derive_getters::Getters;
use playtime_error::{InputError, InputErrorKind};
use serde::{Deserialize, Serialize};

/// A validated lookup for one game title.
///
/// # Examples
///
/// ```
/// use playtime_core::LookupRequest;
///
/// let request = LookupRequest::new("  Hollow Knight ").unwrap();
/// assert_eq!(request.game_title(), "Hollow Knight");
/// assert!(LookupRequest::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct LookupRequest {
    /// Trimmed, non-empty title
    game_title: String,
}

impl LookupRequest {
    /// Validate a title, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`InputErrorKind::MissingTitle`] if the title is empty after trimming.
    #[track_caller]
    pub fn new(game_title: impl AsRef<str>) -> Result<Self, InputError> {
        let trimmed = game_title.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InputError::new(InputErrorKind::MissingTitle));
        }
        Ok(Self {
            game_title: trimmed.to_string(),
        })
    }
}

/// The externally observable lookup output: `{"time": "..."}`.
///
/// # Examples
///
/// ```
/// use playtime_core::{DurationValue, LookupResult};
///
/// let result = LookupResult::from(&DurationValue::hours_minutes(30, 15));
/// assert_eq!(result.time(), "30h 15m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct LookupResult {
    /// Display-ready time or `N/A (...)` string
    time: String,
}

impl From<&DurationValue> for LookupResult {
    fn from(value: &DurationValue) -> Self {
        Self {
            time: value.to_string(),
        }
    }
}

impl From<DurationValue> for LookupResult {
    fn from(value: DurationValue) -> Self {
        Self::from(&value)
    }
}
