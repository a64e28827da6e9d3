//! Top-level error wrapper types.

use crate::{ConfigError, InputError, TransportError};

/// Every fault the lookup pipeline can surface to its caller.
///
/// # Examples
///
/// ```
/// use playtime_error::{ConfigError, PlaytimeError, PlaytimeErrorKind};
///
/// let err: PlaytimeError = ConfigError::new("no key").into();
/// assert!(matches!(err.kind(), PlaytimeErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PlaytimeErrorKind {
    /// Caller supplied no usable title
    #[from(InputError)]
    Input(InputError),
    /// Service is misconfigured (e.g. no credential)
    #[from(ConfigError)]
    Config(ConfigError),
    /// Completion service call failed
    #[from(TransportError)]
    Transport(TransportError),
}

/// Playtime error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Playtime Error: {}", _0)]
pub struct PlaytimeError(Box<PlaytimeErrorKind>);

impl PlaytimeError {
    /// Create a new error from a kind.
    pub fn new(kind: PlaytimeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PlaytimeErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PlaytimeErrorKind
impl<T> From<T> for PlaytimeError
where
    T: Into<PlaytimeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Playtime operations.
pub type PlaytimeResult<T> = std::result::Result<T, PlaytimeError>;
